//! Sarwate byte-at-a-time kernel.
//!
//! The register lives in one of two spaces, chosen by `reflect_in`:
//!
//! - **reflected**: bit 0 is the oldest bit; the register shifts right and the
//!   low byte indexes the table.
//! - **normal**: bit `W - 1` is the oldest bit; the register shifts left and
//!   the high byte indexes the table.
//!
//! An 8-bit register shifts out completely, so both rules reduce to
//! `table[reg ^ byte]` without a width special case.

use crate::{params::CrcParams, table::Table, width::Width};

/// Register value before any input has been folded in.
///
/// `initial` is given in normal form; in reflected space it is bit-reversed.
#[inline]
#[must_use]
pub fn init_register<W: Width>(params: &CrcParams<W>) -> W {
  if params.reflect_in {
    params.initial.reverse()
  } else {
    params.initial
  }
}

/// Advance the register by one byte.
#[inline(always)]
#[must_use]
pub fn update_byte<W: Width>(register: W, byte: u8, table: &Table<W>, reflect_in: bool) -> W {
  if reflect_in {
    register.shr8() ^ table.get(register.low_byte() ^ byte)
  } else {
    register.shl8() ^ table.get(register.high_byte() ^ byte)
  }
}

/// Fold `data` into the register, strictly in order.
#[inline]
#[must_use]
pub fn update<W: Width>(register: W, data: &[u8], table: &Table<W>, reflect_in: bool) -> W {
  if reflect_in {
    data
      .iter()
      .fold(register, |reg, &byte| reg.shr8() ^ table.get(reg.low_byte() ^ byte))
  } else {
    data
      .iter()
      .fold(register, |reg, &byte| reg.shl8() ^ table.get(reg.high_byte() ^ byte))
  }
}

/// Turn a register into the published checksum.
///
/// When `reflect_out` disagrees with `reflect_in` the register is reversed
/// into the requested output orientation before `xor_out` is applied.
#[inline]
#[must_use]
pub fn finalize<W: Width>(register: W, params: &CrcParams<W>) -> W {
  let oriented = if params.is_coupled() {
    register
  } else {
    register.reverse()
  };
  oriented ^ params.xor_out
}

/// Recover the register that [`finalize`] turned into `crc`.
///
/// Finalization is a bijection, so folding more bytes into the recovered
/// register continues the original computation.
#[inline]
#[must_use]
pub fn unfinalize<W: Width>(crc: W, params: &CrcParams<W>) -> W {
  let oriented = crc ^ params.xor_out;
  if params.is_coupled() {
    oriented
  } else {
    oriented.reverse()
  }
}
