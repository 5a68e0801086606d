//! CRC algorithm parameters.
//!
//! This module defines the parameter record for a CRC algorithm following
//! the conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use core::fmt;

use crate::width::Width;

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC algorithm
/// of width `W` (`u8`, `u16`, `u32` or `u64`).
///
/// # Parameters
///
/// - `polynomial`: The generator polynomial in normal form (without the implicit high bit)
/// - `initial`: Initial value for the CRC register, in normal form
/// - `reflect_in`: If true, input bytes are processed least-significant bit first
/// - `reflect_out`: If true, the final CRC is reflected before the XOR
/// - `xor_out`: Value to XOR with the final CRC
///
/// `name` and `check` are catalog metadata; the arithmetic never reads them.
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC-32, CRC-64/XZ) use
/// reflected input and output, which maps to LSB-first processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams<W> {
  /// Catalog name, e.g. `"CRC-16/MODBUS"`.
  pub name: &'static str,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: W,
  /// Initial value for the CRC register.
  pub initial: W,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: W,
  /// CRC of the ASCII string `"123456789"`.
  pub check: W,
}

impl<W: Width> CrcParams<W> {
  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    W::BITS
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[inline]
  #[must_use]
  pub fn polynomial_reflected(&self) -> W {
    self.polynomial.reverse()
  }

  /// True when input and output reflection agree.
  ///
  /// Every record in the catalog is coupled; the engine also handles the
  /// uncoupled combinations.
  #[inline]
  #[must_use]
  pub const fn is_coupled(&self) -> bool {
    self.reflect_in == self.reflect_out
  }

  /// Copy of these parameters under a different initial value.
  #[inline]
  #[must_use]
  pub fn with_initial(mut self, initial: W) -> Self {
    self.initial = initial;
    self
  }
}

impl<W: Width> fmt::Display for CrcParams<W> {
  /// Catalogue-style one-line description.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = (W::BITS / 4) as usize + 2;
    write!(
      f,
      "width={} poly={:#0d$x} init={:#0d$x} refin={} refout={} xorout={:#0d$x} check={:#0d$x} name={:?}",
      W::BITS,
      self.polynomial,
      self.initial,
      self.reflect_in,
      self.reflect_out,
      self.xor_out,
      self.check,
      self.name,
      d = digits,
    )
  }
}
