//! Register widths supported by the engine.
//!
//! Every CRC in this crate is computed by one generic algorithm over a
//! [`Width`]: an unsigned integer type whose bit count is the CRC width.
//! The trait is sealed and implemented for exactly `u8`, `u16`, `u32` and
//! `u64` by a single macro, so the four instantiations cannot drift apart.

use core::{
  fmt,
  hash::Hash,
  ops::{BitAnd, BitXor, BitXorAssign, Shl, Shr},
};

use crate::table::Table;

mod sealed {
  pub trait Sealed {}
}

/// Unsigned integer type used as a CRC register.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The CRC width is always the
/// full bit count of the type.
pub trait Width:
  Copy
  + Eq
  + Ord
  + Hash
  + Default
  + fmt::Debug
  + fmt::LowerHex
  + Send
  + Sync
  + 'static
  + BitAnd<Output = Self>
  + BitXor<Output = Self>
  + BitXorAssign
  + Shl<u32, Output = Self>
  + Shr<u32, Output = Self>
  + sealed::Sealed
{
  /// Register width in bits.
  const BITS: u32;
  /// All bits clear.
  const ZERO: Self;
  /// Only bit 0 set.
  const ONE: Self;
  /// Only bit `BITS - 1` set.
  const TOP_BIT: Self;

  /// Zero-extend a byte into the low bits of the register.
  fn from_byte(byte: u8) -> Self;

  /// Bits 0..8.
  fn low_byte(self) -> u8;

  /// Bits `BITS - 8..BITS`.
  fn high_byte(self) -> u8;

  /// Shift left by one byte, discarding bits past the width.
  ///
  /// An 8-bit register shifts out entirely and becomes zero.
  fn shl8(self) -> Self;

  /// Shift right by one byte.
  ///
  /// An 8-bit register shifts out entirely and becomes zero.
  fn shr8(self) -> Self;

  /// Reverse the bit order: bit 0 becomes bit `BITS - 1` and so on.
  fn reverse(self) -> Self;

  /// Widen losslessly into a `u64`.
  fn to_u64(self) -> u64;

  /// Build the Sarwate lookup table for `polynomial`.
  fn build_table(polynomial: Self, reflect_in: bool) -> Table<Self>;
}

/// Reverse the bit order of `value` within its own width.
#[inline]
#[must_use]
pub fn reverse_bits<W: Width>(value: W) -> W {
  value.reverse()
}

macro_rules! impl_width {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl sealed::Sealed for $ty {}

      impl Width for $ty {
        const BITS: u32 = <$ty>::BITS;
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const TOP_BIT: Self = 1 << (<$ty>::BITS - 1);

        #[inline(always)]
        fn from_byte(byte: u8) -> Self {
          Self::from(byte)
        }

        #[inline(always)]
        fn low_byte(self) -> u8 {
          self as u8
        }

        #[inline(always)]
        fn high_byte(self) -> u8 {
          (self >> (<$ty>::BITS - 8)) as u8
        }

        #[inline(always)]
        fn shl8(self) -> Self {
          self.checked_shl(8).unwrap_or(0)
        }

        #[inline(always)]
        fn shr8(self) -> Self {
          self.checked_shr(8).unwrap_or(0)
        }

        #[inline(always)]
        fn reverse(self) -> Self {
          self.reverse_bits()
        }

        #[inline(always)]
        fn to_u64(self) -> u64 {
          u64::from(self)
        }

        #[inline]
        fn build_table(polynomial: Self, reflect_in: bool) -> Table<Self> {
          Table::<$ty>::build(polynomial, reflect_in)
        }
      }
    )+
  };
}

impl_width!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
  use super::*;

  /// Bit-at-a-time reversal, independent of the intrinsic.
  fn reflect_loop(value: u64, width: u32) -> u64 {
    let mut result = 0u64;
    for i in 0..width {
      if (value >> i) & 1 != 0 {
        result |= 1 << (width - 1 - i);
      }
    }
    result
  }

  #[test]
  fn reverse_known_values() {
    assert_eq!(reverse_bits(0x01u8), 0x80);
    assert_eq!(reverse_bits(0x31u8), 0x8C);
    assert_eq!(reverse_bits(0x8005u16), 0xA001);
    assert_eq!(reverse_bits(0x1021u16), 0x8408);
    assert_eq!(reverse_bits(0x04C1_1DB7u32), 0xEDB8_8320);
    assert_eq!(reverse_bits(0x1EDC_6F41u32), 0x82F6_3B78);
    assert_eq!(reverse_bits(0x42F0_E1EB_A9EA_3693u64), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn reverse_matches_bit_loop() {
    for v in 0u16..=255 {
      let v8 = v as u8;
      assert_eq!(u64::from(v8.reverse()), reflect_loop(u64::from(v8), 8));
    }

    let samples = [0u64, 1, 0x8000_0000_0000_0000, 0x0123_4567_89AB_CDEF, u64::MAX, 0xD1B5_4A32_D192_ED03];
    for &s in &samples {
      assert_eq!(u64::from((s as u16).reverse()), reflect_loop(s & 0xFFFF, 16));
      assert_eq!(u64::from((s as u32).reverse()), reflect_loop(s & 0xFFFF_FFFF, 32));
      assert_eq!(s.reverse(), reflect_loop(s, 64));
    }
  }

  #[test]
  fn reverse_is_an_involution() {
    for v in 0u8..=255 {
      assert_eq!(v.reverse().reverse(), v);
    }
    for v in (0u32..=0xFFFF).step_by(7) {
      let v = v as u16;
      assert_eq!(v.reverse().reverse(), v);
    }
    let mut x = 0x9E37_79B9_7F4A_7C15u64;
    for _ in 0..1000 {
      x ^= x << 13;
      x ^= x >> 7;
      x ^= x << 17;
      assert_eq!(x.reverse().reverse(), x);
      assert_eq!((x as u32).reverse().reverse(), x as u32);
    }
  }

  #[test]
  fn reverse_does_not_leak_between_widths() {
    // The low byte of a wider value must not reappear in the low bits.
    assert_eq!(0x00FFu16.reverse(), 0xFF00);
    assert_eq!(0x0000_00FFu32.reverse(), 0xFF00_0000);
    assert_eq!(0xFFu64.reverse(), 0xFF00_0000_0000_0000);
  }

  #[test]
  fn byte_access() {
    assert_eq!(0xABu8.low_byte(), 0xAB);
    assert_eq!(0xABu8.high_byte(), 0xAB);
    assert_eq!(0x1234u16.low_byte(), 0x34);
    assert_eq!(0x1234u16.high_byte(), 0x12);
    assert_eq!(0x1234_5678u32.high_byte(), 0x12);
    assert_eq!(0x0102_0304_0506_0708u64.low_byte(), 0x08);
    assert_eq!(0x0102_0304_0506_0708u64.high_byte(), 0x01);
  }

  #[test]
  fn byte_shifts_truncate_to_width() {
    assert_eq!(0xFFu8.shl8(), 0);
    assert_eq!(0xFFu8.shr8(), 0);
    assert_eq!(0x1234u16.shl8(), 0x3400);
    assert_eq!(0x1234u16.shr8(), 0x0012);
    assert_eq!(0xFFFF_FFFFu32.shl8(), 0xFFFF_FF00);
    assert_eq!(u64::MAX.shr8(), 0x00FF_FFFF_FFFF_FFFF);
  }

  #[test]
  fn constants() {
    assert_eq!(<u8 as Width>::TOP_BIT, 0x80);
    assert_eq!(<u16 as Width>::TOP_BIT, 0x8000);
    assert_eq!(<u32 as Width>::TOP_BIT, 0x8000_0000);
    assert_eq!(<u64 as Width>::TOP_BIT, 0x8000_0000_0000_0000);
    assert_eq!(<u64 as Width>::BITS, 64);
  }
}
