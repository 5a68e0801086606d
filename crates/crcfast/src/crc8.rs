//! 8-bit typed checksums.
//!
//! One type per catalog entry, for bus and sensor protocols (1-Wire, SMBus,
//! AUTOSAR). An 8-bit register is consumed whole by every byte, so each update
//! is a single table lookup.
//!
//! # Usage
//!
//! ```
//! use crcfast::{Checksum, Crc8Maxim};
//!
//! assert_eq!(Crc8Maxim::checksum(b"123456789"), 0xA1);
//!
//! let mut hasher = Crc8Maxim::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xA1);
//! ```

use crate::catalog;

define_crc_type! {
  /// CRC-8/AUTOSAR checksum.
  pub struct Crc8Autosar: u8 = catalog::CRC8_AUTOSAR;
}

define_crc_type! {
  /// CRC-8/BLUETOOTH checksum.
  pub struct Crc8Bluetooth: u8 = catalog::CRC8_BLUETOOTH;
}

define_crc_type! {
  /// CRC-8/CDMA2000 checksum.
  pub struct Crc8Cdma2000: u8 = catalog::CRC8_CDMA2000;
}

define_crc_type! {
  /// CRC-8/DARC checksum.
  pub struct Crc8Darc: u8 = catalog::CRC8_DARC;
}

define_crc_type! {
  /// CRC-8/DVB-S2 checksum.
  pub struct Crc8DvbS2: u8 = catalog::CRC8_DVB_S2;
}

define_crc_type! {
  /// CRC-8/EBU checksum.
  pub struct Crc8Ebu: u8 = catalog::CRC8_EBU;
}

define_crc_type! {
  /// CRC-8/GSM-A checksum.
  pub struct Crc8GsmA: u8 = catalog::CRC8_GSM_A;
}

define_crc_type! {
  /// CRC-8/GSM-B checksum.
  pub struct Crc8GsmB: u8 = catalog::CRC8_GSM_B;
}

define_crc_type! {
  /// CRC-8/ITU checksum.
  pub struct Crc8Itu: u8 = catalog::CRC8_ITU;
}

define_crc_type! {
  /// CRC-8/I-CODE checksum.
  pub struct Crc8ICode: u8 = catalog::CRC8_I_CODE;
}

define_crc_type! {
  /// CRC-8/LTE checksum.
  pub struct Crc8Lte: u8 = catalog::CRC8_LTE;
}

define_crc_type! {
  /// CRC-8/MAXIM checksum.
  pub struct Crc8Maxim: u8 = catalog::CRC8_MAXIM;
}

define_crc_type! {
  /// CRC-8/MIFARE-MAD checksum.
  pub struct Crc8MifareMad: u8 = catalog::CRC8_MIFARE_MAD;
}

define_crc_type! {
  /// CRC-8/NRSC-5 checksum.
  pub struct Crc8Nrsc5: u8 = catalog::CRC8_NRSC_5;
}

define_crc_type! {
  /// CRC-8/OPENSAFETY checksum.
  pub struct Crc8Opensafety: u8 = catalog::CRC8_OPENSAFETY;
}

define_crc_type! {
  /// CRC-8/ROHC checksum.
  pub struct Crc8Rohc: u8 = catalog::CRC8_ROHC;
}

define_crc_type! {
  /// CRC-8/SAE-J1850 checksum.
  pub struct Crc8SaeJ1850: u8 = catalog::CRC8_SAE_J1850;
}

define_crc_type! {
  /// CRC-8/SMBUS checksum.
  pub struct Crc8Smbus: u8 = catalog::CRC8_SMBUS;
}

define_crc_type! {
  /// CRC-8/WCDMA checksum.
  pub struct Crc8Wcdma: u8 = catalog::CRC8_WCDMA;
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
      Crc8Autosar,
      Crc8Bluetooth,
      Crc8Cdma2000,
      Crc8Darc,
      Crc8DvbS2,
      Crc8Ebu,
      Crc8GsmA,
      Crc8GsmB,
      Crc8Itu,
      Crc8ICode,
      Crc8Lte,
      Crc8Maxim,
      Crc8MifareMad,
      Crc8Nrsc5,
      Crc8Opensafety,
      Crc8Rohc,
      Crc8SaeJ1850,
      Crc8Smbus,
      Crc8Wcdma,
    );
  }

  #[test]
  fn output_size() {
    assert_eq!(Crc8Autosar::OUTPUT_SIZE, 1);
  }

  #[test]
  fn resume_continues_a_split_computation() {
    let mut hasher = Crc8Maxim::resume(Crc8Maxim::checksum(b"1234"));
    hasher.update(b"56789");
    assert_eq!(hasher.finalize(), 0xA1);
  }

  #[test]
  fn default_equals_new() {
    assert_eq!(Crc8Maxim::default().finalize(), Crc8Maxim::new().finalize());
    assert_eq!(Crc8Maxim::default().finalize(), Crc8Maxim::checksum(&[]));
  }
}

#[cfg(test)]
define_crc_property_tests!(crc8_maxim_props, Crc8Maxim);

#[cfg(test)]
define_crc_property_tests!(crc8_smbus_props, Crc8Smbus);

#[cfg(test)]
define_crc_property_tests!(crc8_autosar_props, Crc8Autosar);
