//! Basic usage: typed, runtime-parameterized, by-name and cached APIs.
//!
//! Run with: `cargo run --example basic -p crcfast`

use crcfast::{Checksum, Crc, Crc8Maxim, Crc16Modbus, Crc32Bzip2, Crc64Xz, CrcParams, TableCache, catalog};

fn main() {
  println!("=== crcfast Basic Examples ===\n");

  typed_examples();
  runtime_examples();
  lookup_example();
  cache_example();
  introspection();
}

/// Typed checksums: table embedded at compile time.
fn typed_examples() {
  println!("--- Typed Checksums ---\n");

  let data = b"123456789";

  let crc8 = Crc8Maxim::checksum(data);
  println!("CRC-8/MAXIM:   0x{crc8:02X}");
  assert_eq!(crc8, 0xA1);

  let crc16 = Crc16Modbus::checksum(data);
  println!("CRC-16/MODBUS: 0x{crc16:04X}");
  assert_eq!(crc16, 0x4B37);

  let crc32 = Crc32Bzip2::checksum(data);
  println!("CRC-32/BZIP2:  0x{crc32:08X}");
  assert_eq!(crc32, 0xFC89_1918);

  let crc64 = Crc64Xz::checksum(data);
  println!("CRC-64/XZ:     0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  // Streaming, then resume from a stored value
  let mut hasher = Crc32Bzip2::new();
  hasher.update(b"1234");
  let partial = hasher.finalize();
  let mut resumed = Crc32Bzip2::resume(partial);
  resumed.update(b"56789");
  assert_eq!(resumed.finalize(), crc32);

  match Crc16Modbus::verify(data, 0x0000) {
    Ok(()) => println!("verify: ok"),
    Err(e) => println!("verify: {e}"),
  }

  println!();
}

/// Runtime parameters: any polynomial, any reflection.
fn runtime_examples() {
  println!("--- Runtime Parameters ---\n");

  let params = CrcParams {
    name: "CRC-16/CUSTOM",
    polynomial: 0x8BB7u16,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: false,
    xor_out: 0x0000,
    check: 0,
  };
  println!("{params}");

  let crc = Crc::new(params);
  let mut digest = crc.digest();
  digest.update(b"1234");
  digest.update(b"56789");
  println!("streamed: 0x{:04X}", digest.finalize());
  assert_eq!(digest.finalize(), crc.checksum(b"123456789"));

  println!();
}

/// Parameters chosen by name.
fn lookup_example() {
  println!("--- Lookup By Name ---\n");

  for name in ["crc-32c", "CRC16_XMODEM", "crc-24/openpgp"] {
    match catalog::find(name) {
      Ok(alg) => println!("{name:>16}: {} -> 0x{:X}", alg.name(), alg.checksum(b"123456789")),
      Err(e) => println!("{name:>16}: {e}"),
    }
  }

  println!();
}

/// One table per (polynomial, reflection), shared across parameter sets.
fn cache_example() {
  println!("--- Table Cache ---\n");

  let cache = TableCache::<u16>::new();
  for &p in catalog::CRC16 {
    let _ = cache.checksum(p, b"123456789");
  }
  println!("{} parameter sets, {} tables", catalog::CRC16.len(), cache.len());

  println!();
}

fn introspection() {
  println!("--- Introspection ---\n");

  let config = crcfast::config::get();
  println!("requested: {}", config.requested_force.as_str());
  println!("effective: {}", config.effective_force.as_str());
  println!("backend:   {}", crcfast::backend_name());
}
