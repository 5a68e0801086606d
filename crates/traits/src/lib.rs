//! Core checksum traits shared across the crcfast workspace.
//!
//! This crate provides the foundational traits that all checksum
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Non-cryptographic checksums | CRC-8, CRC-16, CRC-32, CRC-64 |
//!
//! # Error Types
//!
//! - [`ChecksumMismatch`] - a computed checksum differs from the expected one
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::ChecksumMismatch;
