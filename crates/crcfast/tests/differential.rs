//! Differential tests against the `crc` crate.
//!
//! Named catalog entries are compared with the crate's own catalogue
//! constants; arbitrary parameter sets are compared through custom
//! `crc::Algorithm` definitions.

use crcfast::{Checksum, Crc16Modbus, Crc16Xmodem, Crc32Adccp, Crc32Bzip2, Crc32C, Crc64Xz, CrcParams, catalog};
use proptest::prelude::*;

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

// ─────────────────────────────────────────────────────────────────────────────
// Parameter conversion
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! to_crc_algorithm {
  ($fn_name:ident, $ty:ty) => {
    fn $fn_name(p: &CrcParams<$ty>) -> &'static crc::Algorithm<$ty> {
      Box::leak(Box::new(crc::Algorithm {
        width: <$ty>::BITS as u8,
        poly: p.polynomial,
        init: p.initial,
        refin: p.reflect_in,
        refout: p.reflect_out,
        xorout: p.xor_out,
        check: p.check,
        residue: 0,
      }))
    }
  };
}

to_crc_algorithm!(algorithm8, u8);
to_crc_algorithm!(algorithm16, u16);
to_crc_algorithm!(algorithm32, u32);
to_crc_algorithm!(algorithm64, u64);

// ─────────────────────────────────────────────────────────────────────────────
// Named entries
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn named_entries_match_crc_crate() {
  for len in [0usize, 1, 9, 64, 1000] {
    let data = gen_bytes(len, 0x5eed ^ len as u64);

    assert_eq!(
      Crc16Modbus::checksum(&data),
      crc::Crc::<u16>::new(&crc::CRC_16_MODBUS).checksum(&data)
    );
    assert_eq!(
      Crc16Xmodem::checksum(&data),
      crc::Crc::<u16>::new(&crc::CRC_16_XMODEM).checksum(&data)
    );
    assert_eq!(
      Crc32Adccp::checksum(&data),
      crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(&data)
    );
    assert_eq!(
      Crc32Bzip2::checksum(&data),
      crc::Crc::<u32>::new(&crc::CRC_32_BZIP2).checksum(&data)
    );
    assert_eq!(
      Crc32C::checksum(&data),
      crc::Crc::<u32>::new(&crc::CRC_32_ISCSI).checksum(&data)
    );
    assert_eq!(Crc64Xz::checksum(&data), crc::Crc::<u64>::new(&crc::CRC_64_XZ).checksum(&data));
    assert_eq!(
      crcfast::crc8(&catalog::CRC8_MAXIM, &data),
      crc::Crc::<u8>::new(&crc::CRC_8_MAXIM_DOW).checksum(&data)
    );
  }
}

#[test]
fn whole_catalog_matches_crc_crate() {
  let data = gen_bytes(513, 0xabcdef);
  for &p in catalog::CRC8 {
    let theirs = crc::Crc::<u8>::new(algorithm8(p)).checksum(&data);
    assert_eq!(crcfast::crc8(p, &data), theirs, "{}", p.name);
  }
  for &p in catalog::CRC16 {
    let theirs = crc::Crc::<u16>::new(algorithm16(p)).checksum(&data);
    assert_eq!(crcfast::crc16(p, &data), theirs, "{}", p.name);
  }
  for &p in catalog::CRC32 {
    let theirs = crc::Crc::<u32>::new(algorithm32(p)).checksum(&data);
    assert_eq!(crcfast::crc32(p, &data), theirs, "{}", p.name);
  }
  for &p in catalog::CRC64 {
    let theirs = crc::Crc::<u64>::new(algorithm64(p)).checksum(&data);
    assert_eq!(crcfast::crc64(p, &data), theirs, "{}", p.name);
  }
}

#[test]
fn streaming_matches_crc_crate_digest() {
  let data = gen_bytes(2048, 99);
  let theirs = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
  let mut their_digest = theirs.digest();
  let mut ours = Crc32Adccp::new();
  for chunk in data.chunks(37) {
    their_digest.update(chunk);
    ours.update(chunk);
  }
  assert_eq!(ours.finalize(), their_digest.finalize());
}

// ─────────────────────────────────────────────────────────────────────────────
// Arbitrary parameters
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! random_params_match {
  ($test_name:ident, $ty:ty, $to_alg:ident) => {
    proptest! {
      #[test]
      fn $test_name(
        poly in any::<$ty>(),
        init in any::<$ty>(),
        refin in any::<bool>(),
        refout in any::<bool>(),
        xorout in any::<$ty>(),
        data in proptest::collection::vec(any::<u8>(), 0..256),
      ) {
        let params = CrcParams {
          name: "random",
          polynomial: poly,
          initial: init,
          reflect_in: refin,
          reflect_out: refout,
          xor_out: xorout,
          check: 0,
        };
        let theirs = crc::Crc::<$ty>::new($to_alg(&params)).checksum(&data);
        prop_assert_eq!(crcfast::checksum(&params, &data), theirs);
      }
    }
  };
}

random_params_match!(random_params_8, u8, algorithm8);
random_params_match!(random_params_16, u16, algorithm16);
random_params_match!(random_params_32, u32, algorithm32);
random_params_match!(random_params_64, u64, algorithm64);
