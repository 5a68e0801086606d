//! 32-bit catalog entries.

use crate::params::CrcParams;

/// CRC-32/ADCCP
///
/// The ubiquitous CRC-32: Ethernet, gzip, zip, PNG. Also CRC-32/ISO-HDLC.
pub const CRC32_ADCCP: CrcParams<u32> = CrcParams {
  name: "CRC-32/ADCCP",
  polynomial: 0x04C1_1DB7,
  initial: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0xCBF4_3926,
};

/// CRC-32/AUTOSAR
///
/// AUTOSAR E2E profile 4.
pub const CRC32_AUTOSAR: CrcParams<u32> = CrcParams {
  name: "CRC-32/AUTOSAR",
  polynomial: 0xF4AC_FB13,
  initial: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0x1697_D06A,
};

/// CRC-32/BZIP2
///
/// bzip2 block checksum; also CRC-32/AAL5.
pub const CRC32_BZIP2: CrcParams<u32> = CrcParams {
  name: "CRC-32/BZIP2",
  polynomial: 0x04C1_1DB7,
  initial: 0xFFFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF_FFFF,
  check: 0xFC89_1918,
};

/// CRC-32/C
///
/// Castagnoli: iSCSI, SCTP, ext4, Btrfs.
pub const CRC32_C: CrcParams<u32> = CrcParams {
  name: "CRC-32/C",
  polynomial: 0x1EDC_6F41,
  initial: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0xE306_9283,
};

/// CRC-32/CD-ROM-EDC.
pub const CRC32_CD_ROM_EDC: CrcParams<u32> = CrcParams {
  name: "CRC-32/CD-ROM-EDC",
  polynomial: 0x8001_801B,
  initial: 0x0000_0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000_0000,
  check: 0x6EC2_EDC4,
};

/// CRC-32/D.
pub const CRC32_D: CrcParams<u32> = CrcParams {
  name: "CRC-32/D",
  polynomial: 0xA833_982B,
  initial: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0x8731_5576,
};

/// CRC-32/JAMCRC
///
/// CRC-32 without the final inversion.
pub const CRC32_JAMCRC: CrcParams<u32> = CrcParams {
  name: "CRC-32/JAMCRC",
  polynomial: 0x04C1_1DB7,
  initial: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000_0000,
  check: 0x340B_C6D9,
};

/// CRC-32/MPEG2
///
/// MPEG-2 transport stream sections.
pub const CRC32_MPEG2: CrcParams<u32> = CrcParams {
  name: "CRC-32/MPEG2",
  polynomial: 0x04C1_1DB7,
  initial: 0xFFFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000,
  check: 0x0376_E6E7,
};

/// CRC-32/POSIX
///
/// The CRC kernel of POSIX `cksum` (without the length suffix).
pub const CRC32_POSIX: CrcParams<u32> = CrcParams {
  name: "CRC-32/POSIX",
  polynomial: 0x04C1_1DB7,
  initial: 0x0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF_FFFF,
  check: 0x765E_7680,
};

/// CRC-32/Q.
pub const CRC32_Q: CrcParams<u32> = CrcParams {
  name: "CRC-32/Q",
  polynomial: 0x8141_41AB,
  initial: 0x0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000,
  check: 0x3010_BF7F,
};

/// CRC-32/XFER.
pub const CRC32_XFER: CrcParams<u32> = CrcParams {
  name: "CRC-32/XFER",
  polynomial: 0x0000_00AF,
  initial: 0x0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000,
  check: 0xBD0B_E338,
};

/// Every 32-bit entry, in catalog order.
pub const CRC32: &[&CrcParams<u32>] = &[
  &CRC32_ADCCP,
  &CRC32_AUTOSAR,
  &CRC32_BZIP2,
  &CRC32_C,
  &CRC32_CD_ROM_EDC,
  &CRC32_D,
  &CRC32_JAMCRC,
  &CRC32_MPEG2,
  &CRC32_POSIX,
  &CRC32_Q,
  &CRC32_XFER,
];
