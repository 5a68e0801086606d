//! Internal macros for typed checksum generation.
//!
//! Every catalog entry gets a zero-sized-config type whose parameters and
//! lookup table are associated constants. The four widths share one macro,
//! so every typed checksum has identical structure.

/// Generate a typed checksum bound to a catalog entry.
///
/// This macro creates:
/// - The struct definition with `state` and `initial` registers
/// - `PARAMS` and `TABLE` associated constants (table built at compile time)
/// - `resume()`, `backend_name()`, `config()` methods
/// - `Checksum` trait implementation
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16Modbus`)
/// - `$ty`: The register type (`u8`, `u16`, `u32` or `u64`)
/// - `$params`: The catalog constant (e.g., `catalog::CRC16_MODBUS`)
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident: $ty:ty = $params:path;
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug)]
    $vis struct $name {
      /// Current register.
      state: $ty,
      /// Register restored by `reset`.
      initial: $ty,
    }

    impl $name {
      /// Parameter set.
      pub const PARAMS: $crate::CrcParams<$ty> = $params;

      /// Lookup table, computed at compile time.
      pub const TABLE: $crate::Table<$ty> = $crate::Table::<$ty>::build(Self::PARAMS.polynomial, Self::PARAMS.reflect_in);

      const INIT: $ty = Self::register_for(Self::PARAMS.initial);

      /// Map an initial value in normal form into the register space.
      const fn register_for(initial: $ty) -> $ty {
        if Self::PARAMS.reflect_in { initial.reverse_bits() } else { initial }
      }

      /// Create a hasher to resume from a previous CRC value.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $ty) -> Self {
        let oriented = crc ^ Self::PARAMS.xor_out;
        let state = if Self::PARAMS.reflect_in == Self::PARAMS.reflect_out {
          oriented
        } else {
          oriented.reverse_bits()
        };
        Self { state, initial: state }
      }

      /// Get the name of the currently selected backend.
      #[must_use]
      pub fn backend_name() -> &'static str {
        $crate::backend_name()
      }

      /// Get the effective runtime configuration.
      #[must_use]
      pub fn config() -> $crate::config::CrcConfig {
        $crate::config::get()
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::Checksum>::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$ty>();
      type Output = $ty;

      #[inline]
      fn new() -> Self {
        Self {
          state: Self::INIT,
          initial: Self::INIT,
        }
      }

      #[inline]
      fn with_initial(initial: $ty) -> Self {
        let state = Self::register_for(initial);
        Self { state, initial: state }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = $crate::dispatch::update(
          self.state,
          data,
          &Self::TABLE,
          Self::PARAMS.polynomial,
          Self::PARAMS.reflect_in,
        );
      }

      #[inline]
      fn finalize(&self) -> $ty {
        $crate::engine::finalize(self.state, &Self::PARAMS)
      }

      #[inline]
      fn reset(&mut self) {
        self.state = self.initial;
      }
    }

    #[cfg(test)]
    impl $crate::tests::TypedCrc for $name {
      fn params() -> $crate::CrcParams<$ty> {
        Self::PARAMS
      }

      fn resume(crc: $ty) -> Self {
        Self::resume(crc)
      }
    }
  };
}
