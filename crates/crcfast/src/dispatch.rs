//! Kernel selection.
//!
//! Every update in the crate goes through [`update`], which routes to the
//! table kernel or, when forced by configuration, the bitwise reference. Both
//! kernels share a register space, so the choice never changes a result.

use crate::{config, engine, reference, table::Table, width::Width};

/// Fold `data` into `register` with the configured kernel.
#[inline]
#[must_use]
pub(crate) fn update<W: Width>(register: W, data: &[u8], table: &Table<W>, polynomial: W, reflect_in: bool) -> W {
  match config::get().effective_force {
    config::Force::Reference => reference::update_bitwise(register, data, polynomial, reflect_in),
    config::Force::Auto | config::Force::Table => engine::update(register, data, table, reflect_in),
  }
}

/// Name of the kernel every checksum in this process uses.
///
/// # Examples
///
/// ```
/// let name = crcfast::backend_name();
/// assert!(name == "portable/table" || name == "reference/bitwise");
/// ```
#[inline]
#[must_use]
pub fn backend_name() -> &'static str {
  config::get().backend_name()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog;

  #[test]
  fn dispatched_update_matches_both_kernels() {
    let p = &catalog::CRC32_C;
    let table = Table::new(p.polynomial, p.reflect_in);
    let data = b"dispatch";
    let init = engine::init_register(p);
    let got = update(init, data, &table, p.polynomial, p.reflect_in);
    assert_eq!(got, engine::update(init, data, &table, p.reflect_in));
    assert_eq!(got, reference::update_bitwise(init, data, p.polynomial, p.reflect_in));
  }

  #[test]
  fn backend_name_reflects_config() {
    assert_eq!(backend_name(), config::get().backend_name());
  }
}
