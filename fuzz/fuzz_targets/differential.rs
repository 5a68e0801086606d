//! Differential fuzzing against the `crc` crate and the bitwise reference.

#![no_main]

use crcfast::{Checksum, Crc16Modbus, Crc32Adccp, Crc64Xz, catalog, reference};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours = Crc32Adccp::checksum(data);
  let theirs = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(data);
  assert_eq!(ours, theirs, "CRC-32 mismatch: ours={ours:#010x}, crc={theirs:#010x}, len={}", data.len());

  let ours = Crc16Modbus::checksum(data);
  let theirs = crc::Crc::<u16>::new(&crc::CRC_16_MODBUS).checksum(data);
  assert_eq!(ours, theirs, "CRC-16/MODBUS mismatch, len={}", data.len());

  let ours = Crc64Xz::checksum(data);
  let theirs = crc::Crc::<u64>::new(&crc::CRC_64_XZ).checksum(data);
  assert_eq!(ours, theirs, "CRC-64/XZ mismatch, len={}", data.len());

  for &p in catalog::CRC8 {
    assert_eq!(crcfast::crc8(p, data), reference::checksum_bitwise(p, data), "{}", p.name);
  }
});
