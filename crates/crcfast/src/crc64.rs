//! 64-bit typed checksums.
//!
//! One type per catalog entry, for archives and storage integrity. Each
//! carries its parameters and a compile-time lookup table.
//!
//! # Usage
//!
//! ```
//! use crcfast::{Checksum, Crc64Xz};
//!
//! assert_eq!(Crc64Xz::checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
//!
//! let mut hasher = Crc64Xz::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0x995D_C9BB_DF19_39FA);
//! ```

use crate::catalog;

define_crc_type! {
  /// CRC-64/ECMA-182 checksum.
  pub struct Crc64Ecma182: u64 = catalog::CRC64_ECMA_182;
}

define_crc_type! {
  /// CRC-64/GO-ISO checksum.
  pub struct Crc64GoIso: u64 = catalog::CRC64_GO_ISO;
}

define_crc_type! {
  /// CRC-64/WE checksum.
  pub struct Crc64We: u64 = catalog::CRC64_WE;
}

define_crc_type! {
  /// CRC-64/XZ checksum.
  pub struct Crc64Xz: u64 = catalog::CRC64_XZ;
}


#[cfg(test)]
define_crc_property_tests!(crc64_xz_props, Crc64Xz);

#[cfg(test)]
define_crc_property_tests!(crc64_ecma182_props, Crc64Ecma182);

#[cfg(test)]
define_crc_property_tests!(crc64_we_props, Crc64We);

#[cfg(test)]
define_crc_property_tests!(crc64_go_iso_props, Crc64GoIso);
