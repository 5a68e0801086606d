//! Error types for checksum verification.
//!
//! Individual crates may define additional errors as needed.

use core::fmt;

/// A computed checksum did not match the expected one.
///
/// Returned by [`Checksum::verify`](crate::Checksum::verify). Both values are
/// kept so callers can report them; CRCs are not secrets.
///
/// # Examples
///
/// ```
/// use traits::ChecksumMismatch;
///
/// fn check(computed: u16, received: u16) -> Result<(), ChecksumMismatch<u16>> {
///   if computed == received {
///     Ok(())
///   } else {
///     Err(ChecksumMismatch::new(received, computed))
///   }
/// }
///
/// let err = check(0x4B37, 0x0000).unwrap_err();
/// assert_eq!(err.expected(), 0x0000);
/// assert_eq!(err.actual(), 0x4B37);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChecksumMismatch<T> {
  expected: T,
  actual: T,
}

impl<T: Copy> ChecksumMismatch<T> {
  /// Create a new mismatch error.
  #[inline]
  #[must_use]
  pub const fn new(expected: T, actual: T) -> Self {
    Self { expected, actual }
  }

  /// The checksum the caller expected.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> T {
    self.expected
  }

  /// The checksum actually computed over the data.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> T {
    self.actual
  }
}

impl<T: fmt::LowerHex> fmt::Display for ChecksumMismatch<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "checksum mismatch: expected {:#x}, computed {:#x}",
      self.expected, self.actual
    )
  }
}

impl<T: fmt::Debug + fmt::LowerHex> core::error::Error for ChecksumMismatch<T> {}
