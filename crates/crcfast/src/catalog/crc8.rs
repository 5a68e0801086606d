//! 8-bit catalog entries.

use crate::params::CrcParams;

/// CRC-8/AUTOSAR
///
/// AUTOSAR E2E profile 2.
pub const CRC8_AUTOSAR: CrcParams<u8> = CrcParams {
  name: "CRC-8/AUTOSAR",
  polynomial: 0x2F,
  initial: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF,
  check: 0xDF,
};

/// CRC-8/BLUETOOTH
///
/// Bluetooth header error check.
pub const CRC8_BLUETOOTH: CrcParams<u8> = CrcParams {
  name: "CRC-8/BLUETOOTH",
  polynomial: 0xA7,
  initial: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x26,
};

/// CRC-8/CDMA2000.
pub const CRC8_CDMA2000: CrcParams<u8> = CrcParams {
  name: "CRC-8/CDMA2000",
  polynomial: 0x9B,
  initial: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xDA,
};

/// CRC-8/DARC.
pub const CRC8_DARC: CrcParams<u8> = CrcParams {
  name: "CRC-8/DARC",
  polynomial: 0x39,
  initial: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x15,
};

/// CRC-8/DVB-S2.
pub const CRC8_DVB_S2: CrcParams<u8> = CrcParams {
  name: "CRC-8/DVB-S2",
  polynomial: 0xD5,
  initial: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xBC,
};

/// CRC-8/EBU.
pub const CRC8_EBU: CrcParams<u8> = CrcParams {
  name: "CRC-8/EBU",
  polynomial: 0x1D,
  initial: 0xFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x97,
};

/// CRC-8/GSM-A.
pub const CRC8_GSM_A: CrcParams<u8> = CrcParams {
  name: "CRC-8/GSM-A",
  polynomial: 0x1D,
  initial: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x37,
};

/// CRC-8/GSM-B.
pub const CRC8_GSM_B: CrcParams<u8> = CrcParams {
  name: "CRC-8/GSM-B",
  polynomial: 0x49,
  initial: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF,
  check: 0x94,
};

/// CRC-8/ITU
///
/// ITU-T I.432.1, ATM header error control.
pub const CRC8_ITU: CrcParams<u8> = CrcParams {
  name: "CRC-8/ITU",
  polynomial: 0x07,
  initial: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x55,
  check: 0xA1,
};

/// CRC-8/I-CODE.
pub const CRC8_I_CODE: CrcParams<u8> = CrcParams {
  name: "CRC-8/I-CODE",
  polynomial: 0x1D,
  initial: 0xFD,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x7E,
};

/// CRC-8/LTE.
pub const CRC8_LTE: CrcParams<u8> = CrcParams {
  name: "CRC-8/LTE",
  polynomial: 0x9B,
  initial: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xEA,
};

/// CRC-8/MAXIM
///
/// Dallas/Maxim 1-Wire bus, iButton.
pub const CRC8_MAXIM: CrcParams<u8> = CrcParams {
  name: "CRC-8/MAXIM",
  polynomial: 0x31,
  initial: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0xA1,
};

/// CRC-8/MIFARE-MAD.
pub const CRC8_MIFARE_MAD: CrcParams<u8> = CrcParams {
  name: "CRC-8/MIFARE-MAD",
  polynomial: 0x1D,
  initial: 0xC7,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x99,
};

/// CRC-8/NRSC-5.
pub const CRC8_NRSC_5: CrcParams<u8> = CrcParams {
  name: "CRC-8/NRSC-5",
  polynomial: 0x31,
  initial: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xF7,
};

/// CRC-8/OPENSAFETY.
pub const CRC8_OPENSAFETY: CrcParams<u8> = CrcParams {
  name: "CRC-8/OPENSAFETY",
  polynomial: 0x2F,
  initial: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x3E,
};

/// CRC-8/ROHC
///
/// Robust header compression (RFC 3095).
pub const CRC8_ROHC: CrcParams<u8> = CrcParams {
  name: "CRC-8/ROHC",
  polynomial: 0x07,
  initial: 0xFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0xD0,
};

/// CRC-8/SAE-J1850
///
/// SAE J1850 vehicle bus.
pub const CRC8_SAE_J1850: CrcParams<u8> = CrcParams {
  name: "CRC-8/SAE-J1850",
  polynomial: 0x1D,
  initial: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF,
  check: 0x4B,
};

/// CRC-8/SMBUS
///
/// SMBus packet error code; the plain "CRC-8".
pub const CRC8_SMBUS: CrcParams<u8> = CrcParams {
  name: "CRC-8/SMBUS",
  polynomial: 0x07,
  initial: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xF4,
};

/// CRC-8/WCDMA.
pub const CRC8_WCDMA: CrcParams<u8> = CrcParams {
  name: "CRC-8/WCDMA",
  polynomial: 0x9B,
  initial: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x25,
};

/// Every 8-bit entry, in catalog order.
pub const CRC8: &[&CrcParams<u8>] = &[
  &CRC8_AUTOSAR,
  &CRC8_BLUETOOTH,
  &CRC8_CDMA2000,
  &CRC8_DARC,
  &CRC8_DVB_S2,
  &CRC8_EBU,
  &CRC8_GSM_A,
  &CRC8_GSM_B,
  &CRC8_ITU,
  &CRC8_I_CODE,
  &CRC8_LTE,
  &CRC8_MAXIM,
  &CRC8_MIFARE_MAD,
  &CRC8_NRSC_5,
  &CRC8_OPENSAFETY,
  &CRC8_ROHC,
  &CRC8_SAE_J1850,
  &CRC8_SMBUS,
  &CRC8_WCDMA,
];
