//! Sarwate lookup tables.
//!
//! A table maps "register byte XOR input byte" to the next partial remainder,
//! letting the engine advance one byte per lookup instead of one bit per
//! iteration. Tables are built by `const fn`, so catalog-bound checksums
//! embed theirs directly in the binary.
//!
//! # Table Modes
//!
//! | Mode | Seed for byte `i` | Step (8 times) |
//! |------|-------------------|----------------|
//! | reflected | `i` | `reg & 1 ? (reg >> 1) ^ reverse(poly) : reg >> 1` |
//! | normal | `i << (W - 8)` | `reg & top ? (reg << 1) ^ poly : reg << 1` |
//!
//! A table depends only on `(polynomial, reflect_in)`.

use core::fmt;

use crate::width::Width;

/// Number of entries in every table: one per byte value.
pub const TABLE_LEN: usize = 256;

/// A 256-entry Sarwate lookup table for a register of width `W`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Table<W> {
  entries: [W; TABLE_LEN],
}

impl<W: Width> Table<W> {
  /// Build the table for `polynomial` (normal form) in the given mode.
  #[inline]
  #[must_use]
  pub fn new(polynomial: W, reflect_in: bool) -> Self {
    W::build_table(polynomial, reflect_in)
  }

  /// Look up the entry for `index`.
  ///
  /// Every `u8` is a valid index, so this never fails.
  #[inline(always)]
  #[must_use]
  #[allow(clippy::indexing_slicing)] // u8 index into 256 entries
  pub fn get(&self, index: u8) -> W {
    self.entries[usize::from(index)]
  }

  /// All 256 entries, in byte order.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[W; TABLE_LEN] {
    &self.entries
  }
}

impl<W: Width> fmt::Debug for Table<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Table")
      .field("width", &W::BITS)
      .field("first", &format_args!("{:#x}", self.get(1)))
      .field("last", &format_args!("{:#x}", self.get(0xFF)))
      .finish()
  }
}

// All array indexing below uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
macro_rules! impl_const_table {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Table<$ty> {
        /// Build the table at compile time.
        ///
        /// `polynomial` is in normal form; the reflected mode reverses it
        /// internally.
        #[allow(clippy::indexing_slicing)]
        #[must_use]
        pub const fn build(polynomial: $ty, reflect_in: bool) -> Self {
          const SHIFT: u32 = <$ty>::BITS - 8;
          const TOP: $ty = 1 << (<$ty>::BITS - 1);

          let mut entries = [0 as $ty; TABLE_LEN];
          let mut i = 0usize;

          if reflect_in {
            let poly = polynomial.reverse_bits();
            while i < TABLE_LEN {
              let mut crc = i as $ty;
              let mut bit = 0;
              while bit < 8 {
                crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
                bit += 1;
              }
              entries[i] = crc;
              i += 1;
            }
          } else {
            while i < TABLE_LEN {
              let mut crc = (i as $ty) << SHIFT;
              let mut bit = 0;
              while bit < 8 {
                crc = if crc & TOP != 0 { (crc << 1) ^ polynomial } else { crc << 1 };
                bit += 1;
              }
              entries[i] = crc;
              i += 1;
            }
          }

          Self { entries }
        }
      }
    )+
  };
}

impl_const_table!(u8, u16, u32, u64);
