//! Table-driven CRC checksums for 8, 16, 32 and 64-bit widths.
//!
//! This crate computes Cyclic Redundancy Checks with Sarwate's byte-at-a-time
//! lookup tables. One generic engine serves every width and every parameter
//! set; a catalog of 64 standard parameterizations ships with it.
//!
//! # Entry Points
//!
//! | API | Table | Use |
//! |-----|-------|-----|
//! | [`checksum`], [`crc8`] .. [`crc64`] | built per call | one-off computations |
//! | [`Crc`] + [`Digest`] | owned by the instance | repeated or streaming use of runtime parameters |
//! | [`TableCache`] | shared `Arc`, built once per key | many parameter sets across threads (`std`) |
//! | typed checksums ([`Crc16Modbus`], [`Crc32Bzip2`], ...) | compile-time constant | a fixed catalog entry |
//! | [`catalog::find`] | built per call | parameters chosen by name at runtime |
//!
//! # Example
//!
//! ```rust
//! use crcfast::{Checksum, Crc, Crc32Bzip2, catalog};
//!
//! // Typed, zero-config
//! assert_eq!(Crc32Bzip2::checksum(b"123456789"), 0xFC89_1918);
//!
//! // Runtime parameters, streaming
//! let crc = Crc::new(catalog::CRC16_XMODEM);
//! let mut digest = crc.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0x31C3);
//!
//! // By name
//! let alg = catalog::find("crc-8/maxim")?;
//! assert_eq!(alg.checksum(b"123456789"), 0xA1);
//! # Ok::<(), crcfast::UnknownAlgorithm>(())
//! ```
//!
//! # Custom Parameters
//!
//! ```rust
//! use crcfast::{CrcParams, checksum};
//!
//! // CRC-16/MODBUS with a non-standard initial value.
//! let params = CrcParams {
//!   name: "custom",
//!   polynomial: 0x8005u16,
//!   initial: 0x0000,
//!   reflect_in: true,
//!   reflect_out: true,
//!   xor_out: 0x0000,
//!   check: 0xBB3D,
//! };
//! assert_eq!(checksum(&params, b"123456789"), params.check);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use
//! (this drops [`TableCache`] and the environment override):
//!
//! ```toml
//! [dependencies]
//! crcfast = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod cache;
pub mod catalog;
pub mod config;
mod crc16;
mod crc32;
mod crc64;
mod crc8;
mod dispatch;
pub mod engine;
mod error;
mod params;
mod proptests;
pub mod reference;
mod runtime;
mod table;
mod width;

#[cfg(feature = "std")]
pub use cache::{CachedCrc, TableCache};
pub use catalog::Algorithm;
pub use crc8::*;
pub use crc16::*;
pub use crc32::*;
pub use crc64::*;
pub use dispatch::backend_name;
pub use error::UnknownAlgorithm;
pub use params::CrcParams;
pub use runtime::{Crc, Digest, checksum, crc8, crc16, crc32, crc64};
pub use table::{TABLE_LEN, Table};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumMismatch};
pub use width::{Width, reverse_bits};
