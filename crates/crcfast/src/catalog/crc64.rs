//! 64-bit catalog entries.

use crate::params::CrcParams;

/// CRC-64/ECMA-182
///
/// ECMA-182 as published, unreflected and uninverted.
pub const CRC64_ECMA_182: CrcParams<u64> = CrcParams {
  name: "CRC-64/ECMA-182",
  polynomial: 0x42F0_E1EB_A9EA_3693,
  initial: 0x0000_0000_0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000_0000_0000,
  check: 0x6C40_DF5F_0B49_7347,
};

/// CRC-64/GO-ISO
///
/// Go `hash/crc64` ISO table; also CRC-64/ISO-3309.
pub const CRC64_GO_ISO: CrcParams<u64> = CrcParams {
  name: "CRC-64/GO-ISO",
  polynomial: 0x0000_0000_0000_001B,
  initial: 0xFFFF_FFFF_FFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  check: 0xB909_56C7_75A4_1001,
};

/// CRC-64/WE
///
/// Wolfgang Ehrhardt's unreflected inverted variant.
pub const CRC64_WE: CrcParams<u64> = CrcParams {
  name: "CRC-64/WE",
  polynomial: 0x42F0_E1EB_A9EA_3693,
  initial: 0xFFFF_FFFF_FFFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  check: 0x62EC_59E3_F1A4_F00A,
};

/// CRC-64/XZ
///
/// XZ Utils and 7-Zip; also CRC-64/GO-ECMA.
pub const CRC64_XZ: CrcParams<u64> = CrcParams {
  name: "CRC-64/XZ",
  polynomial: 0x42F0_E1EB_A9EA_3693,
  initial: 0xFFFF_FFFF_FFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  check: 0x995D_C9BB_DF19_39FA,
};

/// Every 64-bit entry, in catalog order.
pub const CRC64: &[&CrcParams<u64>] = &[
  &CRC64_ECMA_182,
  &CRC64_GO_ISO,
  &CRC64_WE,
  &CRC64_XZ,
];
