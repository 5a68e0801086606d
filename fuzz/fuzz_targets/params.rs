//! Fuzz the generic engine with arbitrary parameter sets.

#![no_main]

use arbitrary::Arbitrary;
use crcfast::{Crc, CrcParams, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  polynomial: u32,
  initial: u32,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u32,
  narrow: u16,
  split: usize,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let params = CrcParams {
    name: "fuzz",
    polynomial: input.polynomial,
    initial: input.initial,
    reflect_in: input.reflect_in,
    reflect_out: input.reflect_out,
    xor_out: input.xor_out,
    check: 0,
  };
  let data = &input.data;

  let crc = Crc::new(params);
  let expected = reference::checksum_bitwise(&params, data);
  assert_eq!(crc.checksum(data), expected, "table != reference for {params}");

  let split = if data.is_empty() { 0 } else { input.split % data.len() };
  let (a, b) = data.split_at(split);
  let mut digest = crc.digest();
  digest.update(a);
  digest.update(b);
  assert_eq!(digest.finalize(), expected, "split at {split}");

  let narrow = CrcParams {
    name: "fuzz16",
    polynomial: input.narrow,
    initial: input.narrow.rotate_left(3),
    reflect_in: input.reflect_in,
    reflect_out: !input.reflect_out,
    xor_out: input.narrow.swap_bytes(),
    check: 0,
  };
  assert_eq!(crcfast::checksum(&narrow, data), reference::checksum_bitwise(&narrow, data));
});
