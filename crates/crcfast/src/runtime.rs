//! Runtime-parameterized CRC computation.
//!
//! [`checksum`] and the width-specific entry points build a table per call.
//! [`Crc`] owns its table, so repeated computations with one parameter set
//! pay for table construction once.

use crate::{dispatch, engine, params::CrcParams, table::Table, width::Width};

// ─────────────────────────────────────────────────────────────────────────────
// One-shot entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Compute the CRC of `data` under `params`.
///
/// # Examples
///
/// ```
/// use crcfast::{catalog, checksum};
///
/// assert_eq!(checksum(&catalog::CRC16_MODBUS, b"123456789"), 0x4B37);
/// assert_eq!(checksum(&catalog::CRC16_MODBUS, b""), 0xFFFF);
/// ```
#[must_use]
pub fn checksum<W: Width>(params: &CrcParams<W>, data: &[u8]) -> W {
  let table = Table::new(params.polynomial, params.reflect_in);
  compute(params, &table, data)
}

/// Compute an 8-bit CRC.
#[inline]
#[must_use]
pub fn crc8(params: &CrcParams<u8>, data: &[u8]) -> u8 {
  checksum(params, data)
}

/// Compute a 16-bit CRC.
#[inline]
#[must_use]
pub fn crc16(params: &CrcParams<u16>, data: &[u8]) -> u16 {
  checksum(params, data)
}

/// Compute a 32-bit CRC.
#[inline]
#[must_use]
pub fn crc32(params: &CrcParams<u32>, data: &[u8]) -> u32 {
  checksum(params, data)
}

/// Compute a 64-bit CRC.
#[inline]
#[must_use]
pub fn crc64(params: &CrcParams<u64>, data: &[u8]) -> u64 {
  checksum(params, data)
}

#[inline]
pub(crate) fn compute<W: Width>(params: &CrcParams<W>, table: &Table<W>, data: &[u8]) -> W {
  let reg = dispatch::update(
    engine::init_register(params),
    data,
    table,
    params.polynomial,
    params.reflect_in,
  );
  engine::finalize(reg, params)
}

// ─────────────────────────────────────────────────────────────────────────────
// Reusable engine
// ─────────────────────────────────────────────────────────────────────────────

/// A parameter set bound to its lookup table.
///
/// # Examples
///
/// ```
/// use crcfast::{Crc, catalog};
///
/// let crc = Crc::new(catalog::CRC32_BZIP2);
/// assert_eq!(crc.checksum(b"123456789"), 0xFC89_1918);
///
/// let mut digest = crc.digest();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0xFC89_1918);
/// ```
#[derive(Clone)]
pub struct Crc<W> {
  params: CrcParams<W>,
  table: Table<W>,
}

impl<W: Width> Crc<W> {
  /// Build the table for `params`.
  #[must_use]
  pub fn new(params: CrcParams<W>) -> Self {
    let table = Table::new(params.polynomial, params.reflect_in);
    Self { params, table }
  }

  /// Compute the CRC of `data`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> W {
    compute(&self.params, &self.table, data)
  }

  /// Start a streaming computation.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> Digest<'_, W> {
    Digest::new(&self.params, &self.table)
  }

  /// Start a streaming computation from a custom initial value (normal form).
  #[inline]
  #[must_use]
  pub fn digest_with_initial(&self, initial: W) -> Digest<'_, W> {
    Digest::with_initial(&self.params, &self.table, initial)
  }

  /// The parameter set.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams<W> {
    &self.params
  }

  /// The lookup table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &Table<W> {
    &self.table
  }

  /// Name of the kernel in use.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    dispatch::backend_name()
  }
}

impl<W: Width> core::fmt::Debug for Crc<W> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Crc").field("params", &self.params).finish_non_exhaustive()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming state
// ─────────────────────────────────────────────────────────────────────────────

/// Incremental CRC state borrowing a parameter set and its table.
#[derive(Clone, Copy)]
pub struct Digest<'a, W> {
  params: &'a CrcParams<W>,
  table: &'a Table<W>,
  initial: W,
  register: W,
}

impl<'a, W: Width> Digest<'a, W> {
  pub(crate) fn new(params: &'a CrcParams<W>, table: &'a Table<W>) -> Self {
    let initial = engine::init_register(params);
    Self {
      params,
      table,
      initial,
      register: initial,
    }
  }

  pub(crate) fn with_initial(params: &'a CrcParams<W>, table: &'a Table<W>, initial: W) -> Self {
    let initial = if params.reflect_in { initial.reverse() } else { initial };
    Self {
      params,
      table,
      initial,
      register: initial,
    }
  }

  /// Fold more data into the state.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.register = dispatch::update(
      self.register,
      data,
      self.table,
      self.params.polynomial,
      self.params.reflect_in,
    );
  }

  /// Checksum of everything fed so far. Does not consume the state.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> W {
    engine::finalize(self.register, self.params)
  }

  /// Return to the starting state.
  #[inline]
  pub fn reset(&mut self) {
    self.register = self.initial;
  }
}

impl<W: Width> core::fmt::Debug for Digest<'_, W> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Digest")
      .field("name", &self.params.name)
      .field("register", &format_args!("{:#x}", self.register))
      .finish_non_exhaustive()
  }
}
