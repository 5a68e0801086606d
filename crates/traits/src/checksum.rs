//! Non-cryptographic checksum traits.
//!
//! Traits for CRC algorithms of any width.
//!
//! - **Performance**: Zero-cost abstractions, inline-friendly
//! - **Streaming**: Incremental updates for large data
//! - **Verification**: Compare a computed checksum against a transmitted one

use core::fmt::Debug;

use crate::error::ChecksumMismatch;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// ```rust,ignore
/// use crcfast::{Checksum, Crc16Modbus};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc16Modbus::checksum(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc16Modbus::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-8: 1
  /// - CRC-16: 2
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u8`, `u16`, `u32` or `u64`).
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the algorithm's initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom initial value.
  ///
  /// `initial` is given in normal (non-reflected) representation, exactly
  /// like the algorithm's own initial value.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Check `data` against a checksum received alongside it.
  ///
  /// # Errors
  ///
  /// Returns [`ChecksumMismatch`] carrying both values when the computed
  /// checksum differs from `expected`.
  #[inline]
  fn verify(data: &[u8], expected: Self::Output) -> Result<(), ChecksumMismatch<Self::Output>> {
    let actual = Self::checksum(data);
    if actual == expected {
      Ok(())
    } else {
      Err(ChecksumMismatch::new(expected, actual))
    }
  }
}
