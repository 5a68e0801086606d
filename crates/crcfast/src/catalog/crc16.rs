//! 16-bit catalog entries.

use crate::params::CrcParams;

/// CRC-16/A.
pub const CRC16_A: CrcParams<u16> = CrcParams {
  name: "CRC-16/A",
  polynomial: 0x1021,
  initial: 0xC6C6,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0xBF05,
};

/// CRC-16/ARC
///
/// Also known as CRC-16/IBM and CRC-16/LHA.
pub const CRC16_ARC: CrcParams<u16> = CrcParams {
  name: "CRC-16/ARC",
  polynomial: 0x8005,
  initial: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0xBB3D,
};

/// CRC-16/AUG-CCITT.
pub const CRC16_AUG_CCITT: CrcParams<u16> = CrcParams {
  name: "CRC-16/AUG-CCITT",
  polynomial: 0x1021,
  initial: 0x1D0F,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xE5CC,
};

/// CRC-16/B
///
/// ISO/IEC 14443-3 type B; also CRC-16/X-25 and CRC-16/IBM-SDLC.
pub const CRC16_B: CrcParams<u16> = CrcParams {
  name: "CRC-16/B",
  polynomial: 0x1021,
  initial: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0x906E,
};

/// CRC-16/CCITT-FALSE
///
/// Also known as CRC-16/IBM-3740.
pub const CRC16_CCITT_FALSE: CrcParams<u16> = CrcParams {
  name: "CRC-16/CCITT-FALSE",
  polynomial: 0x1021,
  initial: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x29B1,
};

/// CRC-16/CDMA2000.
pub const CRC16_CDMA2000: CrcParams<u16> = CrcParams {
  name: "CRC-16/CDMA2000",
  polynomial: 0xC867,
  initial: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x4C06,
};

/// CRC-16/CMS.
pub const CRC16_CMS: CrcParams<u16> = CrcParams {
  name: "CRC-16/CMS",
  polynomial: 0x8005,
  initial: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xAEE7,
};

/// CRC-16/DDS-110.
pub const CRC16_DDS_110: CrcParams<u16> = CrcParams {
  name: "CRC-16/DDS-110",
  polynomial: 0x8005,
  initial: 0x800D,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x9ECF,
};

/// CRC-16/DECT-R.
pub const CRC16_DECT_R: CrcParams<u16> = CrcParams {
  name: "CRC-16/DECT-R",
  polynomial: 0x0589,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0001,
  check: 0x007E,
};

/// CRC-16/DECT-X.
pub const CRC16_DECT_X: CrcParams<u16> = CrcParams {
  name: "CRC-16/DECT-X",
  polynomial: 0x0589,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x007F,
};

/// CRC-16/DNP
///
/// DNP3 distributed network protocol.
pub const CRC16_DNP: CrcParams<u16> = CrcParams {
  name: "CRC-16/DNP",
  polynomial: 0x3D65,
  initial: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0xEA82,
};

/// CRC-16/EN-13757.
pub const CRC16_EN_13757: CrcParams<u16> = CrcParams {
  name: "CRC-16/EN-13757",
  polynomial: 0x3D65,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF,
  check: 0xC2B7,
};

/// CRC-16/GENIBUS.
pub const CRC16_GENIBUS: CrcParams<u16> = CrcParams {
  name: "CRC-16/GENIBUS",
  polynomial: 0x1021,
  initial: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF,
  check: 0xD64E,
};

/// CRC-16/GSM.
pub const CRC16_GSM: CrcParams<u16> = CrcParams {
  name: "CRC-16/GSM",
  polynomial: 0x1021,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF,
  check: 0xCE3C,
};

/// CRC-16/KERMIT
///
/// Kermit protocol; also CRC-16/CCITT-TRUE.
pub const CRC16_KERMIT: CrcParams<u16> = CrcParams {
  name: "CRC-16/KERMIT",
  polynomial: 0x1021,
  initial: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x2189,
};

/// CRC-16/LJ1200.
pub const CRC16_LJ1200: CrcParams<u16> = CrcParams {
  name: "CRC-16/LJ1200",
  polynomial: 0x6F63,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xBDF4,
};

/// CRC-16/MAXIM.
pub const CRC16_MAXIM: CrcParams<u16> = CrcParams {
  name: "CRC-16/MAXIM",
  polynomial: 0x8005,
  initial: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0x44C2,
};

/// CRC-16/MCRF4XX.
pub const CRC16_MCRF4XX: CrcParams<u16> = CrcParams {
  name: "CRC-16/MCRF4XX",
  polynomial: 0x1021,
  initial: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x6F91,
};

/// CRC-16/MODBUS
///
/// Modbus RTU frames.
pub const CRC16_MODBUS: CrcParams<u16> = CrcParams {
  name: "CRC-16/MODBUS",
  polynomial: 0x8005,
  initial: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x4B37,
};

/// CRC-16/NRSC-5.
pub const CRC16_NRSC_5: CrcParams<u16> = CrcParams {
  name: "CRC-16/NRSC-5",
  polynomial: 0x080B,
  initial: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0xA066,
};

/// CRC-16/OPENSAFETY-A.
pub const CRC16_OPENSAFETY_A: CrcParams<u16> = CrcParams {
  name: "CRC-16/OPENSAFETY-A",
  polynomial: 0x5935,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x5D38,
};

/// CRC-16/OPENSAFETY-B.
pub const CRC16_OPENSAFETY_B: CrcParams<u16> = CrcParams {
  name: "CRC-16/OPENSAFETY-B",
  polynomial: 0x755B,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x20FE,
};

/// CRC-16/PROFIBUS.
pub const CRC16_PROFIBUS: CrcParams<u16> = CrcParams {
  name: "CRC-16/PROFIBUS",
  polynomial: 0x1DCF,
  initial: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF,
  check: 0xA819,
};

/// CRC-16/RIELLO.
pub const CRC16_RIELLO: CrcParams<u16> = CrcParams {
  name: "CRC-16/RIELLO",
  polynomial: 0x1021,
  initial: 0xB2AA,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x63D0,
};

/// CRC-16/T10-DIF
///
/// SCSI T10 data integrity field.
pub const CRC16_T10_DIF: CrcParams<u16> = CrcParams {
  name: "CRC-16/T10-DIF",
  polynomial: 0x8BB7,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xD0DB,
};

/// CRC-16/TELEDISK.
pub const CRC16_TELEDISK: CrcParams<u16> = CrcParams {
  name: "CRC-16/TELEDISK",
  polynomial: 0xA097,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x0FB3,
};

/// CRC-16/TMS37157.
pub const CRC16_TMS37157: CrcParams<u16> = CrcParams {
  name: "CRC-16/TMS37157",
  polynomial: 0x1021,
  initial: 0x89EC,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x26B1,
};

/// CRC-16/UMTS.
pub const CRC16_UMTS: CrcParams<u16> = CrcParams {
  name: "CRC-16/UMTS",
  polynomial: 0x8005,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xFEE8,
};

/// CRC-16/USB
///
/// USB token and data packets.
pub const CRC16_USB: CrcParams<u16> = CrcParams {
  name: "CRC-16/USB",
  polynomial: 0x8005,
  initial: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0xB4C8,
};

/// CRC-16/XMODEM
///
/// XMODEM and ZMODEM transfers; also CRC-16/ACORN.
pub const CRC16_XMODEM: CrcParams<u16> = CrcParams {
  name: "CRC-16/XMODEM",
  polynomial: 0x1021,
  initial: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x31C3,
};

/// Every 16-bit entry, in catalog order.
pub const CRC16: &[&CrcParams<u16>] = &[
  &CRC16_A,
  &CRC16_ARC,
  &CRC16_AUG_CCITT,
  &CRC16_B,
  &CRC16_CCITT_FALSE,
  &CRC16_CDMA2000,
  &CRC16_CMS,
  &CRC16_DDS_110,
  &CRC16_DECT_R,
  &CRC16_DECT_X,
  &CRC16_DNP,
  &CRC16_EN_13757,
  &CRC16_GENIBUS,
  &CRC16_GSM,
  &CRC16_KERMIT,
  &CRC16_LJ1200,
  &CRC16_MAXIM,
  &CRC16_MCRF4XX,
  &CRC16_MODBUS,
  &CRC16_NRSC_5,
  &CRC16_OPENSAFETY_A,
  &CRC16_OPENSAFETY_B,
  &CRC16_PROFIBUS,
  &CRC16_RIELLO,
  &CRC16_T10_DIF,
  &CRC16_TELEDISK,
  &CRC16_TMS37157,
  &CRC16_UMTS,
  &CRC16_USB,
  &CRC16_XMODEM,
];
