use crcfast::{
  Checksum, Crc, Crc8Maxim, Crc16Kermit, Crc16Xmodem, Crc32Adccp, Crc32Mpeg2, Crc64Ecma182, Crc64Xz, CrcParams,
  catalog, checksum,
};

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

fn reflect(value: u64, width: u32) -> u64 {
  let mut out = 0u64;
  for i in 0..width {
    if (value >> i) & 1 != 0 {
      out |= 1 << (width - 1 - i);
    }
  }
  out
}

/// Textbook Rocksoft-model CRC on a `u64` register masked to `width` bits.
fn crc_model(width: u32, poly: u64, init: u64, refin: bool, refout: bool, xor_out: u64, data: &[u8]) -> u64 {
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
  let top = 1u64 << (width - 1);

  let mut crc = init & mask;
  for &b in data {
    let b = if refin { reflect(u64::from(b), 8) } else { u64::from(b) };
    crc ^= b << (width - 8);
    for _ in 0..8 {
      if (crc & top) != 0 {
        crc = ((crc << 1) ^ poly) & mask;
      } else {
        crc = (crc << 1) & mask;
      }
    }
  }
  if refout {
    crc = reflect(crc, width);
  }
  (crc ^ xor_out) & mask
}

fn model_of<W: crcfast::Width>(p: &CrcParams<W>, data: &[u8]) -> u64 {
  crc_model(
    W::BITS,
    p.polynomial.to_u64(),
    p.initial.to_u64(),
    p.reflect_in,
    p.reflect_out,
    p.xor_out.to_u64(),
    data,
  )
}

const LENGTHS: [usize; 14] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 63, 255, 256, 1024];
const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

#[test]
fn every_catalog_entry_matches_model() {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);
      for &p in catalog::CRC8 {
        assert_eq!(u64::from(checksum(p, &data)), model_of(p, &data), "{} len={len}", p.name);
      }
      for &p in catalog::CRC16 {
        assert_eq!(u64::from(checksum(p, &data)), model_of(p, &data), "{} len={len}", p.name);
      }
      for &p in catalog::CRC32 {
        assert_eq!(u64::from(checksum(p, &data)), model_of(p, &data), "{} len={len}", p.name);
      }
      for &p in catalog::CRC64 {
        assert_eq!(checksum(p, &data), model_of(p, &data), "{} len={len}", p.name);
      }
    }
  }
}

#[test]
fn uncoupled_reflection_matches_model() {
  let data = gen_bytes(300, 0xfeed);
  for (reflect_in, reflect_out) in [(false, true), (true, false)] {
    let p16 = CrcParams {
      reflect_in,
      reflect_out,
      ..catalog::CRC16_GENIBUS
    };
    let p32 = CrcParams {
      reflect_in,
      reflect_out,
      ..catalog::CRC32_Q
    };
    let p8 = CrcParams {
      reflect_in,
      reflect_out,
      ..catalog::CRC8_DARC
    };
    assert_eq!(u64::from(checksum(&p16, &data)), model_of(&p16, &data));
    assert_eq!(u64::from(checksum(&p32, &data)), model_of(&p32, &data));
    assert_eq!(u64::from(checksum(&p8, &data)), model_of(&p8, &data));
  }
}

#[test]
fn typed_streaming_invariants() {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = Crc64Xz::checksum(&data);
      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = Crc64Xz::new();
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "crc64 split mismatch at len={len} split={split}");

        let mut r = Crc64Xz::resume(Crc64Xz::checksum(a));
        r.update(b);
        assert_eq!(r.finalize(), oneshot, "crc64 resume mismatch at len={len} split={split}");

        let mut r = Crc32Mpeg2::resume(Crc32Mpeg2::checksum(a));
        r.update(b);
        assert_eq!(r.finalize(), Crc32Mpeg2::checksum(&data), "crc32 resume mismatch at len={len}");
      }

      let mut h = Crc16Kermit::new();
      for chunk in data.chunks(7) {
        h.update(chunk);
      }
      assert_eq!(h.finalize(), Crc16Kermit::checksum(&data));
    }
  }
}

#[test]
fn determinism() {
  let data = gen_bytes(4096, 42);
  let crc = Crc::new(catalog::CRC64_ECMA_182);
  let first = crc.checksum(&data);
  for _ in 0..4 {
    assert_eq!(crc.checksum(&data), first);
    assert_eq!(Crc64Ecma182::checksum(&data), first);
    assert_eq!(checksum(&catalog::CRC64_ECMA_182, &data), first);
  }
}

#[test]
fn widths_are_isolated() {
  // Interleave computations of every width; each must match its solo result.
  let data = gen_bytes(777, 7);
  let solo = (
    Crc8Maxim::checksum(&data),
    Crc16Xmodem::checksum(&data),
    Crc32Adccp::checksum(&data),
    Crc64Xz::checksum(&data),
  );

  let mut h8 = Crc8Maxim::new();
  let mut h16 = Crc16Xmodem::new();
  let mut h32 = Crc32Adccp::new();
  let mut h64 = Crc64Xz::new();
  for chunk in data.chunks(13) {
    h8.update(chunk);
    let _ = checksum(&catalog::CRC16_USB, chunk);
    h16.update(chunk);
    let _ = checksum(&catalog::CRC64_WE, chunk);
    h32.update(chunk);
    h64.update(chunk);
  }
  assert_eq!((h8.finalize(), h16.finalize(), h32.finalize(), h64.finalize()), solo);
}

#[test]
fn empty_input_is_oriented_init_xor_out() {
  for &p in catalog::CRC16 {
    let oriented = if p.reflect_out { p.initial.reverse_bits() } else { p.initial };
    assert_eq!(checksum(p, &[]), oriented ^ p.xor_out, "{}", p.name);
  }
  let p = CrcParams {
    reflect_in: false,
    reflect_out: true,
    ..catalog::CRC32_MPEG2.with_initial(0x1234_5678)
  };
  assert_eq!(checksum(&p, &[]), 0x1E6A_2C48 ^ p.xor_out);
}

#[test]
fn verify_reports_mismatch() {
  let data = b"payload";
  let crc = Crc32Adccp::checksum(data);
  assert!(Crc32Adccp::verify(data, crc).is_ok());
  let err = Crc32Adccp::verify(data, crc ^ 1).unwrap_err();
  assert_eq!(err.expected(), crc ^ 1);
  assert_eq!(err.actual(), crc);
  assert!(err.to_string().starts_with("checksum mismatch"));
}
