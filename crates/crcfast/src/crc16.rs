//! 16-bit typed checksums.
//!
//! Most of these share one of two polynomials: `0x1021` (the CCITT family:
//! XMODEM, KERMIT, CCITT-FALSE, ...) or `0x8005` (ARC, MODBUS, USB, ...).
//! Types with the same polynomial and reflection share identical tables.
//!
//! ```
//! use crcfast::{Checksum, Crc16Kermit, Crc16Modbus};
//!
//! assert_eq!(Crc16Modbus::checksum(b"123456789"), 0x4B37);
//! assert_eq!(Crc16Kermit::checksum(b"123456789"), 0x2189);
//! ```

use crate::catalog;

define_crc_type! {
  /// CRC-16/A checksum.
  pub struct Crc16A: u16 = catalog::CRC16_A;
}

define_crc_type! {
  /// CRC-16/ARC checksum.
  pub struct Crc16Arc: u16 = catalog::CRC16_ARC;
}

define_crc_type! {
  /// CRC-16/AUG-CCITT checksum.
  pub struct Crc16AugCcitt: u16 = catalog::CRC16_AUG_CCITT;
}

define_crc_type! {
  /// CRC-16/B checksum.
  pub struct Crc16B: u16 = catalog::CRC16_B;
}

define_crc_type! {
  /// CRC-16/CCITT-FALSE checksum.
  pub struct Crc16CcittFalse: u16 = catalog::CRC16_CCITT_FALSE;
}

define_crc_type! {
  /// CRC-16/CDMA2000 checksum.
  pub struct Crc16Cdma2000: u16 = catalog::CRC16_CDMA2000;
}

define_crc_type! {
  /// CRC-16/CMS checksum.
  pub struct Crc16Cms: u16 = catalog::CRC16_CMS;
}

define_crc_type! {
  /// CRC-16/DDS-110 checksum.
  pub struct Crc16Dds110: u16 = catalog::CRC16_DDS_110;
}

define_crc_type! {
  /// CRC-16/DECT-R checksum.
  pub struct Crc16DectR: u16 = catalog::CRC16_DECT_R;
}

define_crc_type! {
  /// CRC-16/DECT-X checksum.
  pub struct Crc16DectX: u16 = catalog::CRC16_DECT_X;
}

define_crc_type! {
  /// CRC-16/DNP checksum.
  pub struct Crc16Dnp: u16 = catalog::CRC16_DNP;
}

define_crc_type! {
  /// CRC-16/EN-13757 checksum.
  pub struct Crc16En13757: u16 = catalog::CRC16_EN_13757;
}

define_crc_type! {
  /// CRC-16/GENIBUS checksum.
  pub struct Crc16Genibus: u16 = catalog::CRC16_GENIBUS;
}

define_crc_type! {
  /// CRC-16/GSM checksum.
  pub struct Crc16Gsm: u16 = catalog::CRC16_GSM;
}

define_crc_type! {
  /// CRC-16/KERMIT checksum.
  pub struct Crc16Kermit: u16 = catalog::CRC16_KERMIT;
}

define_crc_type! {
  /// CRC-16/LJ1200 checksum.
  pub struct Crc16Lj1200: u16 = catalog::CRC16_LJ1200;
}

define_crc_type! {
  /// CRC-16/MAXIM checksum.
  pub struct Crc16Maxim: u16 = catalog::CRC16_MAXIM;
}

define_crc_type! {
  /// CRC-16/MCRF4XX checksum.
  pub struct Crc16Mcrf4xx: u16 = catalog::CRC16_MCRF4XX;
}

define_crc_type! {
  /// CRC-16/MODBUS checksum.
  pub struct Crc16Modbus: u16 = catalog::CRC16_MODBUS;
}

define_crc_type! {
  /// CRC-16/NRSC-5 checksum.
  pub struct Crc16Nrsc5: u16 = catalog::CRC16_NRSC_5;
}

define_crc_type! {
  /// CRC-16/OPENSAFETY-A checksum.
  pub struct Crc16OpensafetyA: u16 = catalog::CRC16_OPENSAFETY_A;
}

define_crc_type! {
  /// CRC-16/OPENSAFETY-B checksum.
  pub struct Crc16OpensafetyB: u16 = catalog::CRC16_OPENSAFETY_B;
}

define_crc_type! {
  /// CRC-16/PROFIBUS checksum.
  pub struct Crc16Profibus: u16 = catalog::CRC16_PROFIBUS;
}

define_crc_type! {
  /// CRC-16/RIELLO checksum.
  pub struct Crc16Riello: u16 = catalog::CRC16_RIELLO;
}

define_crc_type! {
  /// CRC-16/T10-DIF checksum.
  pub struct Crc16T10Dif: u16 = catalog::CRC16_T10_DIF;
}

define_crc_type! {
  /// CRC-16/TELEDISK checksum.
  pub struct Crc16Teledisk: u16 = catalog::CRC16_TELEDISK;
}

define_crc_type! {
  /// CRC-16/TMS37157 checksum.
  pub struct Crc16Tms37157: u16 = catalog::CRC16_TMS37157;
}

define_crc_type! {
  /// CRC-16/UMTS checksum.
  pub struct Crc16Umts: u16 = catalog::CRC16_UMTS;
}

define_crc_type! {
  /// CRC-16/USB checksum.
  pub struct Crc16Usb: u16 = catalog::CRC16_USB;
}

define_crc_type! {
  /// CRC-16/XMODEM checksum.
  pub struct Crc16Xmodem: u16 = catalog::CRC16_XMODEM;
}


#[cfg(test)]
define_crc_property_tests!(crc16_modbus_props, Crc16Modbus);

#[cfg(test)]
define_crc_property_tests!(crc16_xmodem_props, Crc16Xmodem);

#[cfg(test)]
define_crc_property_tests!(crc16_genibus_props, Crc16Genibus);

#[cfg(test)]
define_crc_property_tests!(crc16_dnp_props, Crc16Dnp);
