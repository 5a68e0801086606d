//! Named CRC parameter sets.
//!
//! The catalog is pure data: one [`CrcParams`] per industry-standard variant,
//! grouped by width. Names follow the CRC Catalogue spelling
//! (`"CRC-16/MODBUS"`).
//!
//! | Width | Entries | Slice |
//! |-------|---------|-------|
//! | 8 | 19 | [`CRC8`] |
//! | 16 | 30 | [`CRC16`] |
//! | 32 | 11 | [`CRC32`] |
//! | 64 | 4 | [`CRC64`] |
//!
//! # Name Lookup
//!
//! [`find`] resolves a name to an [`Algorithm`]. Matching ignores ASCII case
//! and every non-alphanumeric character, so `"crc-16/modbus"`,
//! `"CRC16_MODBUS"` and `"Crc16Modbus"` are the same name. A handful of
//! common aliases (`"CRC-32"`, `"CRC-32/ISCSI"`, ...) resolve as well.
//!
//! ```
//! use crcfast::catalog;
//!
//! let alg = catalog::find("CRC-16/MODBUS")?;
//! assert_eq!(alg.width(), 16);
//! assert_eq!(alg.checksum(b"123456789"), 0x4B37);
//! # Ok::<(), crcfast::UnknownAlgorithm>(())
//! ```

mod crc16;
mod crc32;
mod crc64;
mod crc8;

use core::fmt;

pub use crc8::*;
pub use crc16::*;
pub use crc32::*;
pub use crc64::*;

use crate::{error::UnknownAlgorithm, params::CrcParams, width::Width};

/// A catalog entry of any width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// 8-bit CRC.
  Crc8(&'static CrcParams<u8>),
  /// 16-bit CRC.
  Crc16(&'static CrcParams<u16>),
  /// 32-bit CRC.
  Crc32(&'static CrcParams<u32>),
  /// 64-bit CRC.
  Crc64(&'static CrcParams<u64>),
}

impl Algorithm {
  /// Width in bits.
  #[must_use]
  pub const fn width(self) -> u32 {
    match self {
      Self::Crc8(_) => 8,
      Self::Crc16(_) => 16,
      Self::Crc32(_) => 32,
      Self::Crc64(_) => 64,
    }
  }

  /// Catalog name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc8(p) => p.name,
      Self::Crc16(p) => p.name,
      Self::Crc32(p) => p.name,
      Self::Crc64(p) => p.name,
    }
  }

  /// Published check value, zero-extended.
  #[must_use]
  pub fn check(self) -> u64 {
    match self {
      Self::Crc8(p) => p.check.to_u64(),
      Self::Crc16(p) => p.check.to_u64(),
      Self::Crc32(p) => p.check.to_u64(),
      Self::Crc64(p) => p.check.to_u64(),
    }
  }

  /// Compute this CRC over `data`, zero-extended to 64 bits.
  ///
  /// Builds the table on every call; hold a [`Crc`](crate::Crc) or a typed
  /// checksum when computing repeatedly.
  #[must_use]
  pub fn checksum(self, data: &[u8]) -> u64 {
    match self {
      Self::Crc8(p) => crate::checksum(p, data).to_u64(),
      Self::Crc16(p) => crate::checksum(p, data).to_u64(),
      Self::Crc32(p) => crate::checksum(p, data).to_u64(),
      Self::Crc64(p) => crate::checksum(p, data).to_u64(),
    }
  }

  /// Every catalog entry, narrowest width first.
  pub fn all() -> impl Iterator<Item = Self> {
    CRC8
      .iter()
      .copied()
      .map(Self::Crc8)
      .chain(CRC16.iter().copied().map(Self::Crc16))
      .chain(CRC32.iter().copied().map(Self::Crc32))
      .chain(CRC64.iter().copied().map(Self::Crc64))
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Crc8(p) => fmt::Display::fmt(p, f),
      Self::Crc16(p) => fmt::Display::fmt(p, f),
      Self::Crc32(p) => fmt::Display::fmt(p, f),
      Self::Crc64(p) => fmt::Display::fmt(p, f),
    }
  }
}

/// Alternative names from the CRC Catalogue for entries listed above.
const ALIASES: &[(&str, Algorithm)] = &[
  ("CRC-8", Algorithm::Crc8(&CRC8_SMBUS)),
  ("CRC-8/MAXIM-DOW", Algorithm::Crc8(&CRC8_MAXIM)),
  ("CRC-8/I-432-1", Algorithm::Crc8(&CRC8_ITU)),
  ("CRC-8/TECH-3250", Algorithm::Crc8(&CRC8_EBU)),
  ("CRC-16/IBM", Algorithm::Crc16(&CRC16_ARC)),
  ("CRC-16/IBM-3740", Algorithm::Crc16(&CRC16_CCITT_FALSE)),
  ("CRC-16/CCITT-TRUE", Algorithm::Crc16(&CRC16_KERMIT)),
  ("CRC-16/X-25", Algorithm::Crc16(&CRC16_B)),
  ("CRC-16/IBM-SDLC", Algorithm::Crc16(&CRC16_B)),
  ("CRC-16/ACORN", Algorithm::Crc16(&CRC16_XMODEM)),
  ("CRC-32", Algorithm::Crc32(&CRC32_ADCCP)),
  ("CRC-32/ISO-HDLC", Algorithm::Crc32(&CRC32_ADCCP)),
  ("CRC-32/ISCSI", Algorithm::Crc32(&CRC32_C)),
  ("CRC-32/CASTAGNOLI", Algorithm::Crc32(&CRC32_C)),
  ("CRC-32/AAL5", Algorithm::Crc32(&CRC32_BZIP2)),
  ("CRC-32/CKSUM", Algorithm::Crc32(&CRC32_POSIX)),
  ("CRC-64/GO-ECMA", Algorithm::Crc64(&CRC64_XZ)),
  ("CRC-64/ISO-3309", Algorithm::Crc64(&CRC64_GO_ISO)),
];

/// Compare two names ignoring ASCII case and non-alphanumeric characters.
fn names_match(a: &str, b: &str) -> bool {
  let mut a = a.bytes().filter(u8::is_ascii_alphanumeric);
  let mut b = b.bytes().filter(u8::is_ascii_alphanumeric);
  loop {
    match (a.next(), b.next()) {
      (None, None) => return true,
      (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => {}
      _ => return false,
    }
  }
}

/// Resolve a catalog name (or alias) to its entry.
///
/// # Errors
///
/// Returns [`UnknownAlgorithm`] when nothing matches.
pub fn find(name: &str) -> Result<Algorithm, UnknownAlgorithm> {
  Algorithm::all()
    .find(|alg| names_match(alg.name(), name))
    .or_else(|| {
      ALIASES
        .iter()
        .find(|(alias, _)| names_match(alias, name))
        .map(|&(_, alg)| alg)
    })
    .ok_or(UnknownAlgorithm::new())
}

/// Resolve an 8-bit catalog name.
///
/// # Errors
///
/// Returns [`UnknownAlgorithm`] when nothing of this width matches.
pub fn find8(name: &str) -> Result<&'static CrcParams<u8>, UnknownAlgorithm> {
  match find(name)? {
    Algorithm::Crc8(p) => Ok(p),
    _ => Err(UnknownAlgorithm::new()),
  }
}

/// Resolve a 16-bit catalog name.
///
/// # Errors
///
/// Returns [`UnknownAlgorithm`] when nothing of this width matches.
pub fn find16(name: &str) -> Result<&'static CrcParams<u16>, UnknownAlgorithm> {
  match find(name)? {
    Algorithm::Crc16(p) => Ok(p),
    _ => Err(UnknownAlgorithm::new()),
  }
}

/// Resolve a 32-bit catalog name.
///
/// # Errors
///
/// Returns [`UnknownAlgorithm`] when nothing of this width matches.
pub fn find32(name: &str) -> Result<&'static CrcParams<u32>, UnknownAlgorithm> {
  match find(name)? {
    Algorithm::Crc32(p) => Ok(p),
    _ => Err(UnknownAlgorithm::new()),
  }
}

/// Resolve a 64-bit catalog name.
///
/// # Errors
///
/// Returns [`UnknownAlgorithm`] when nothing of this width matches.
pub fn find64(name: &str) -> Result<&'static CrcParams<u64>, UnknownAlgorithm> {
  match find(name)? {
    Algorithm::Crc64(p) => Ok(p),
    _ => Err(UnknownAlgorithm::new()),
  }
}
