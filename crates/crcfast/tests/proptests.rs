//! Property tests over the public API.

use crcfast::{Algorithm, Checksum, Crc, Crc16CcittFalse, Crc32Posix, Crc64GoIso, TableCache, catalog};
use proptest::prelude::*;

fn catalog_entry() -> impl Strategy<Value = Algorithm> {
  let all: Vec<Algorithm> = Algorithm::all().collect();
  proptest::sample::select(all)
}

/// Respell a catalog name: random case, separators dropped or swapped.
fn respell(name: &str, case_bits: u64, sep: u8) -> String {
  let sep = match sep % 4 {
    0 => "",
    1 => "_",
    2 => " ",
    _ => "-",
  };
  name
    .chars()
    .enumerate()
    .map(|(i, c)| {
      if !c.is_ascii_alphanumeric() {
        sep.to_string()
      } else if (case_bits >> (i % 64)) & 1 == 1 {
        c.to_ascii_lowercase().to_string()
      } else {
        c.to_string()
      }
    })
    .collect()
}

proptest! {
  #[test]
  fn find_accepts_any_spelling(alg in catalog_entry(), case_bits in any::<u64>(), sep in any::<u8>()) {
    let spelled = respell(alg.name(), case_bits, sep);
    prop_assert_eq!(catalog::find(&spelled), Ok(alg));
  }

  #[test]
  fn algorithm_checksum_is_zero_extended(alg in catalog_entry(), data in proptest::collection::vec(any::<u8>(), 0..256)) {
    let value = alg.checksum(&data);
    if alg.width() < 64 {
      prop_assert_eq!(value >> alg.width(), 0);
    }
  }

  #[test]
  fn any_chunking_matches_one_shot(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    cuts in proptest::collection::vec(any::<usize>(), 0..8),
  ) {
    let mut cuts: Vec<usize> = cuts.into_iter().map(|c| if data.is_empty() { 0 } else { c % data.len() }).collect();
    cuts.sort_unstable();

    let crc = Crc::new(catalog::CRC32_POSIX);
    let mut digest = crc.digest();
    let mut typed = Crc32Posix::new();
    let mut start = 0;
    for cut in cuts.into_iter().chain(core::iter::once(data.len())) {
      digest.update(&data[start..cut]);
      typed.update(&data[start..cut]);
      start = cut;
    }
    prop_assert_eq!(digest.finalize(), crc.checksum(&data));
    prop_assert_eq!(typed.finalize(), Crc32Posix::checksum(&data));
  }

  #[test]
  fn resume_chains(parts in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..64), 0..6)) {
    let whole: Vec<u8> = parts.concat();
    let mut crc = Crc64GoIso::checksum(&[]);
    for part in &parts {
      let mut h = Crc64GoIso::resume(crc);
      h.update(part);
      crc = h.finalize();
    }
    prop_assert_eq!(crc, Crc64GoIso::checksum(&whole));
  }

  #[test]
  fn verify_detects_single_bit_flips(data in proptest::collection::vec(any::<u8>(), 1..256), bit in any::<usize>()) {
    let crc = Crc16CcittFalse::checksum(&data);
    let mut corrupted = data.clone();
    let bit = bit % (data.len() * 8);
    corrupted[bit / 8] ^= 1 << (bit % 8);
    prop_assert!(Crc16CcittFalse::verify(&data, crc).is_ok());
    prop_assert!(Crc16CcittFalse::verify(&corrupted, crc).is_err());
  }

  #[test]
  fn cache_agrees_with_catalog(alg in catalog_entry(), data in proptest::collection::vec(any::<u8>(), 0..256)) {
    match alg {
      Algorithm::Crc16(p) => {
        let cache = TableCache::<u16>::new();
        prop_assert_eq!(u64::from(cache.checksum(p, &data)), alg.checksum(&data));
      }
      Algorithm::Crc32(p) => {
        let cache = TableCache::<u32>::new();
        prop_assert_eq!(u64::from(cache.checksum(p, &data)), alg.checksum(&data));
      }
      _ => {}
    }
  }
}
