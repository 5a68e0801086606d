//! Error types for the catalog lookup layer.
//!
//! The CRC arithmetic itself is total and never fails; only resolving a
//! caller-supplied algorithm name can.

use core::fmt;

/// No catalog entry matches the requested name.
///
/// # Examples
///
/// ```
/// use crcfast::{UnknownAlgorithm, catalog};
///
/// assert_eq!(catalog::find("CRC-16/NOPE"), Err(UnknownAlgorithm::new()));
/// assert!(catalog::find("crc-16/modbus").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct UnknownAlgorithm;

impl UnknownAlgorithm {
  /// Create a new lookup error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for UnknownAlgorithm {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for UnknownAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown CRC algorithm")
  }
}

impl core::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(UnknownAlgorithm::new().to_string(), "unknown CRC algorithm");
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", UnknownAlgorithm::new()), "UnknownAlgorithm");
  }

  #[test]
  fn default_impl() {
    let err: UnknownAlgorithm = Default::default();
    assert_eq!(err, UnknownAlgorithm::new());
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    assert!(UnknownAlgorithm::new().source().is_none());
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<UnknownAlgorithm>(), 0);
  }
}
