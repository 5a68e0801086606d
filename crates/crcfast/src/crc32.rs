//! 32-bit typed checksums.

use crate::catalog;

define_crc_type! {
  /// CRC-32/ADCCP checksum.
  pub struct Crc32Adccp: u32 = catalog::CRC32_ADCCP;
}

define_crc_type! {
  /// CRC-32/AUTOSAR checksum.
  pub struct Crc32Autosar: u32 = catalog::CRC32_AUTOSAR;
}

define_crc_type! {
  /// CRC-32/BZIP2 checksum.
  pub struct Crc32Bzip2: u32 = catalog::CRC32_BZIP2;
}

define_crc_type! {
  /// CRC-32/C checksum.
  pub struct Crc32C: u32 = catalog::CRC32_C;
}

define_crc_type! {
  /// CRC-32/CD-ROM-EDC checksum.
  pub struct Crc32CdRomEdc: u32 = catalog::CRC32_CD_ROM_EDC;
}

define_crc_type! {
  /// CRC-32/D checksum.
  pub struct Crc32D: u32 = catalog::CRC32_D;
}

define_crc_type! {
  /// CRC-32/JAMCRC checksum.
  pub struct Crc32Jamcrc: u32 = catalog::CRC32_JAMCRC;
}

define_crc_type! {
  /// CRC-32/MPEG2 checksum.
  pub struct Crc32Mpeg2: u32 = catalog::CRC32_MPEG2;
}

define_crc_type! {
  /// CRC-32/POSIX checksum.
  pub struct Crc32Posix: u32 = catalog::CRC32_POSIX;
}

define_crc_type! {
  /// CRC-32/Q checksum.
  pub struct Crc32Q: u32 = catalog::CRC32_Q;
}

define_crc_type! {
  /// CRC-32/XFER checksum.
  pub struct Crc32Xfer: u32 = catalog::CRC32_XFER;
}

#[cfg(test)]
mod tests {
  use traits::Checksum;

  use super::*;

  const CHECK: &[u8] = b"123456789";

  macro_rules! assert_check_values {
    ($($ty:ty),+ $(,)?) => {
      $(
        assert_eq!(<$ty>::checksum(CHECK), <$ty>::PARAMS.check, "{}", <$ty>::PARAMS.name);
      )+
    };
  }

  #[test]
  fn every_type_reproduces_its_check_value() {
    assert_check_values!(
      Crc32Adccp,
      Crc32Autosar,
      Crc32Bzip2,
      Crc32C,
      Crc32CdRomEdc,
      Crc32D,
      Crc32Jamcrc,
      Crc32Mpeg2,
      Crc32Posix,
      Crc32Q,
      Crc32Xfer,
    );
  }

  #[test]
  fn output_size() {
    assert_eq!(Crc32Adccp::OUTPUT_SIZE, 4);
  }

  #[test]
  fn resume_continues_a_split_computation() {
    let mut hasher = Crc32Bzip2::resume(Crc32Bzip2::checksum(b"1234"));
    hasher.update(b"56789");
    assert_eq!(hasher.finalize(), 0xFC89_1918);
  }

  #[test]
  fn default_equals_new() {
    assert_eq!(Crc32Bzip2::default().finalize(), Crc32Bzip2::new().finalize());
    assert_eq!(Crc32Bzip2::default().finalize(), Crc32Bzip2::checksum(&[]));
  }
}

#[cfg(test)]
define_crc_property_tests!(crc32_adccp_props, Crc32Adccp);

#[cfg(test)]
define_crc_property_tests!(crc32_bzip2_props, Crc32Bzip2);

#[cfg(test)]
define_crc_property_tests!(crc32_c_props, Crc32C);

#[cfg(test)]
define_crc_property_tests!(crc32_xfer_props, Crc32Xfer);
