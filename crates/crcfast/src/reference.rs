//! Bitwise reference implementation.
//!
//! This module is the source of truth for CRC computation. It processes one
//! bit at a time with no lookup table, so it mirrors the polynomial-division
//! definition directly. The table kernel must agree with it for every width,
//! every polynomial and every reflection combination.
//!
//! # CRC Model
//!
//! Computation follows the Rocksoft model (CRC RevEng catalogue):
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (8, 16, 32, 64) |
//! | `poly`    | Generator polynomial, normal form |
//! | `init`    | Initial register value, normal form |
//! | `refin`   | Reflect each input byte before division |
//! | `refout`  | Reflect the register before the final XOR |
//! | `xorout`  | Final XOR value |
//!
//! These functions are slow (about eight operations per bit). Use them for
//! verification, as test oracles, or through the `reference` backend
//! override.

use crate::{params::CrcParams, width::Width};

// ─────────────────────────────────────────────────────────────────────────────
// Rocksoft model
// ─────────────────────────────────────────────────────────────────────────────

/// Full CRC computed bit by bit in normal (MSB-first) space.
///
/// Shares nothing with the table kernel: input reflection is applied to each
/// byte and output reflection to the final register, exactly as the model
/// describes them.
#[must_use]
pub fn checksum_bitwise<W: Width>(params: &CrcParams<W>, data: &[u8]) -> W {
  let mut crc = params.initial;
  for &byte in data {
    let byte = if params.reflect_in { byte.reverse_bits() } else { byte };
    crc ^= W::from_byte(byte) << (W::BITS - 8);
    for _ in 0..8 {
      crc = if crc & W::TOP_BIT != W::ZERO {
        (crc << 1) ^ params.polynomial
      } else {
        crc << 1
      };
    }
  }
  if params.reflect_out {
    crc = crc.reverse();
  }
  crc ^ params.xor_out
}

// ─────────────────────────────────────────────────────────────────────────────
// Register-space kernel
// ─────────────────────────────────────────────────────────────────────────────

/// Fold `data` into a register bit by bit.
///
/// Operates in the same register space as the table kernel, so it can stand
/// in for [`engine::update`](crate::engine::update) between the engine's
/// `init_register` and `finalize`.
#[must_use]
pub fn update_bitwise<W: Width>(register: W, data: &[u8], polynomial: W, reflect_in: bool) -> W {
  let mut crc = register;
  if reflect_in {
    let poly = polynomial.reverse();
    for &byte in data {
      crc ^= W::from_byte(byte);
      for _ in 0..8 {
        crc = if crc & W::ONE != W::ZERO { (crc >> 1) ^ poly } else { crc >> 1 };
      }
    }
  } else {
    for &byte in data {
      crc ^= W::from_byte(byte) << (W::BITS - 8);
      for _ in 0..8 {
        crc = if crc & W::TOP_BIT != W::ZERO {
          (crc << 1) ^ polynomial
        } else {
          crc << 1
        };
      }
    }
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time verification
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise reflected CRC-32 usable in `const` context.
const fn crc32_reflected_const(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0;
  while i < data.len() {
    #[allow(clippy::indexing_slicing)] // i < data.len()
    let byte = data[i];
    crc ^= byte as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

const _: () = {
  assert!(crc32_reflected_const(0xEDB8_8320, !0, b"123456789") ^ !0 == 0xCBF4_3926);
  assert!(crc32_reflected_const(0x82F6_3B78, !0, b"123456789") ^ !0 == 0xE306_9283);
};
