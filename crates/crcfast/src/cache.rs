//! Shared table cache.
//!
//! A [`TableCache`] holds one table per `(polynomial, reflect_in)` key and
//! hands out `Arc`s to it. Each key owns a `OnceLock` slot: the map lock is
//! held only to find or insert the slot, and the table is built through the
//! slot, so concurrent first requests for one key build it exactly once while
//! other keys proceed independently.
//!
//! # Caching Strategy
//!
//! - lookup: short `Mutex` section over the slot map
//! - construction: `OnceLock::get_or_init`, outside the map lock
//! - computation: no lock at all; the table is read through an `Arc`

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use crate::{
  dispatch,
  params::CrcParams,
  runtime::{Digest, compute},
  table::Table,
  width::Width,
};

type Slot<W> = Arc<OnceLock<Arc<Table<W>>>>;

/// Caller-owned cache of lookup tables for width `W`.
///
/// # Examples
///
/// ```
/// use crcfast::{TableCache, catalog};
///
/// let cache = TableCache::<u16>::new();
/// assert_eq!(cache.checksum(&catalog::CRC16_MODBUS, b"123456789"), 0x4B37);
/// // Same polynomial and reflection: the table is shared.
/// assert_eq!(cache.checksum(&catalog::CRC16_ARC, b"123456789"), 0xBB3D);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct TableCache<W> {
  slots: Mutex<HashMap<(W, bool), Slot<W>>>,
}

impl<W: Width> TableCache<W> {
  /// Create an empty cache.
  #[must_use]
  pub fn new() -> Self {
    Self {
      slots: Mutex::new(HashMap::new()),
    }
  }

  // A panic while holding the lock cannot leave the map inconsistent:
  // every critical section is a single lookup, insert or clear.
  fn slots(&self) -> MutexGuard<'_, HashMap<(W, bool), Slot<W>>> {
    self.slots.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Table for `params`, built on first request for its key.
  #[must_use]
  pub fn table(&self, params: &CrcParams<W>) -> Arc<Table<W>> {
    let key = (params.polynomial, params.reflect_in);
    let slot = Arc::clone(self.slots().entry(key).or_default());
    Arc::clone(slot.get_or_init(|| Arc::new(Table::new(key.0, key.1))))
  }

  /// Bind `params` to its cached table.
  #[must_use]
  pub fn crc(&self, params: &CrcParams<W>) -> CachedCrc<W> {
    CachedCrc {
      params: *params,
      table: self.table(params),
    }
  }

  /// Compute the CRC of `data` through the cache.
  #[must_use]
  pub fn checksum(&self, params: &CrcParams<W>, data: &[u8]) -> W {
    compute(params, &self.table(params), data)
  }

  /// Number of distinct tables requested so far.
  #[must_use]
  pub fn len(&self) -> usize {
    self.slots().len()
  }

  /// True when no table has been requested.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.slots().is_empty()
  }

  /// Drop every cached table. Outstanding `Arc`s stay valid.
  pub fn clear(&self) {
    self.slots().clear();
  }
}

impl<W: Width> Default for TableCache<W> {
  fn default() -> Self {
    Self::new()
  }
}

impl<W: Width> core::fmt::Debug for TableCache<W> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("TableCache")
      .field("width", &W::BITS)
      .field("len", &self.len())
      .finish()
  }
}

/// A parameter set bound to a shared, cached table.
#[derive(Clone)]
pub struct CachedCrc<W> {
  params: CrcParams<W>,
  table: Arc<Table<W>>,
}

impl<W: Width> CachedCrc<W> {
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

  /// The parameter set.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams<W> {
    &self.params
  }

  /// The shared table.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Arc<Table<W>> {
    &self.table
  }

  /// Name of the kernel in use.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    dispatch::backend_name()
  }
}

impl<W: Width> core::fmt::Debug for CachedCrc<W> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CachedCrc").field("params", &self.params).finish_non_exhaustive()
  }
}
