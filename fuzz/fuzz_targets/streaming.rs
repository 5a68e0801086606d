//! Fuzz target for the streaming API.
//!
//! Tests that arbitrary sequences of update calls produce correct results.

#![no_main]

use arbitrary::Arbitrary;
use crcfast::{Checksum, Crc, Crc8Smbus, Crc16Kermit, Crc32C, Crc64Xz, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let chunks = chunked(data, &input.chunk_sizes);

  test_streaming::<Crc8Smbus>(data, &chunks);
  test_streaming::<Crc16Kermit>(data, &chunks);
  test_streaming::<Crc32C>(data, &chunks);
  test_streaming::<Crc64Xz>(data, &chunks);

  let crc = Crc::new(catalog::CRC16_GENIBUS);
  let mut digest = crc.digest();
  for chunk in &chunks {
    digest.update(chunk);
  }
  assert_eq!(digest.finalize(), crc.checksum(data), "digest streaming mismatch");
});

fn chunked<'a>(data: &'a [u8], chunk_sizes: &[usize]) -> Vec<&'a [u8]> {
  let mut out = Vec::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    out.push(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }
  out
}

fn test_streaming<C: Checksum>(data: &[u8], chunks: &[&[u8]]) {
  let expected = C::checksum(data);

  let mut hasher = C::new();
  for chunk in chunks {
    hasher.update(chunk);
  }
  assert_eq!(hasher.finalize(), expected, "streaming mismatch");
  assert_eq!(C::checksum_vectored(chunks), expected, "vectored mismatch");
}
