//! Property tests for the generic engine over arbitrary parameters.
//!
//! The typed checksums are covered by `define_crc_property_tests!`; these
//! tests draw the parameter set itself at random, including reflection
//! combinations no catalog entry uses.

#![cfg(all(test, not(miri), feature = "std"))]

extern crate alloc;

use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{Crc, TableCache, Width, checksum, engine, params::CrcParams, reference, table::Table};

fn params_strategy<W: Width + Arbitrary>() -> impl Strategy<Value = CrcParams<W>> {
  (any::<W>(), any::<W>(), any::<bool>(), any::<bool>(), any::<W>()).prop_map(
    |(polynomial, initial, reflect_in, reflect_out, xor_out)| CrcParams {
      name: "random",
      polynomial,
      initial,
      reflect_in,
      reflect_out,
      xor_out,
      check: W::ZERO,
    },
  )
}

fn data_strategy() -> impl Strategy<Value = Vec<u8>> {
  proptest::collection::vec(any::<u8>(), 0..512)
}

macro_rules! width_properties {
  ($mod_name:ident, $ty:ty) => {
    mod $mod_name {
      use super::*;

      proptest! {
        #[test]
        fn table_matches_reference(params in params_strategy::<$ty>(), data in data_strategy()) {
          prop_assert_eq!(checksum(&params, &data), reference::checksum_bitwise(&params, &data));
        }

        #[test]
        fn split_matches_one_shot(params in params_strategy::<$ty>(), data in data_strategy(), split in any::<usize>()) {
          let crc = Crc::new(params);
          let split = if data.is_empty() { 0 } else { split % data.len() };
          let (a, b) = data.split_at(split);
          let mut digest = crc.digest();
          digest.update(a);
          digest.update(b);
          prop_assert_eq!(digest.finalize(), crc.checksum(&data));
        }

        #[test]
        fn table_ignores_init_and_output_params(params in params_strategy::<$ty>(), other in params_strategy::<$ty>()) {
          let mixed = CrcParams { polynomial: params.polynomial, reflect_in: params.reflect_in, ..other };
          let (a, b) = (Crc::new(params), Crc::new(mixed));
          prop_assert_eq!(a.table(), b.table());
        }

        #[test]
        fn empty_input_is_finalized_init(params in params_strategy::<$ty>()) {
          prop_assert_eq!(checksum(&params, &[]), engine::finalize(engine::init_register(&params), &params));
        }

        #[test]
        fn unfinalize_round_trips(params in params_strategy::<$ty>(), reg in any::<$ty>()) {
          prop_assert_eq!(engine::unfinalize(engine::finalize(reg, &params), &params), reg);
        }

        #[test]
        fn cache_matches_fresh_table(params in params_strategy::<$ty>(), data in data_strategy()) {
          let cache = TableCache::<$ty>::new();
          let cached = cache.table(&params);
          prop_assert_eq!(*cached, Table::new(params.polynomial, params.reflect_in));
          prop_assert_eq!(cache.checksum(&params, &data), checksum(&params, &data));
        }
      }
    }
  };
}

width_properties!(width8, u8);
width_properties!(width16, u16);
width_properties!(width32, u32);
width_properties!(width64, u64);
