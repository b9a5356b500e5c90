//! Cyclic redundancy checks.
//!
//! This module provides:
//! - [`Cksum`] - POSIX `cksum` (GNU coreutils), generator `0x04C11DB7`, MSB-first
//! - [`Crc32`] - CRC-32 ISO-HDLC (zip, gzip, PNG), reflected generator `0xEDB88320`
//!
//! Both are driven by one engine parameterized by a [`CrcModel`]. The engine
//! has two kernels producing identical results:
//!
//! | Kernel | Memory | Notes |
//! |--------|--------|-------|
//! | [`CrcKernel::Bitwise`] | 0 bytes | bit-serial division, the reference |
//! | [`CrcKernel::Table`] | 1 KiB per model | one lookup per byte |
//!
//! Selection follows [`config::get`]: short inputs run bitwise, longer ones
//! through the table, unless a kernel is forced.

pub mod bitwise;
pub mod config;
mod model;
pub mod tables;

use core::fmt;

pub use config::{CrcConfig, CrcForce, CrcTunables};
pub use model::{BitOrder, CrcModel};

/// CRC kernel implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrcKernel {
  /// Table-free bit-serial division.
  Bitwise,
  /// Byte-at-a-time lookup table.
  Table,
}

impl CrcKernel {
  /// Kernel name as reported by `kernel_name_for_len`.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Bitwise => "portable/bitwise",
      Self::Table => "portable/table",
    }
  }
}

impl fmt::Display for CrcKernel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

define_crc_type! {
  /// CRC checksum of the POSIX `cksum` utility (GNU coreutils).
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x04C11DB7 (normal, MSB-first)
  /// - **Initial value**: 0x00000000
  /// - **Length suffix**: byte count, least-significant byte first, significant bytes only
  /// - **Final XOR**: 0xFFFFFFFF
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::{Checksum, Cksum, Crc};
  ///
  /// assert_eq!(Cksum.compute(b"abcdef"), 0x2E15_2BB1);
  /// assert_eq!(Cksum.compute(b""), 0xFFFF_FFFF);
  /// assert_eq!(Cksum.generator_polynomial(), 0x04C1_1DB7);
  /// ```
  pub struct Cksum {
    model: CrcModel::CKSUM,
  }
}

define_crc_type! {
  /// CRC-32 checksum (ISO-HDLC / IEEE 802.3).
  ///
  /// Used in Ethernet FCS, zip, gzip, PNG, and many other formats.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
  /// - **Initial value**: 0xFFFFFFFF
  /// - **Final XOR**: 0xFFFFFFFF
  /// - **Reflect input/output**: Yes
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::{Checksum, Crc, Crc32};
  ///
  /// assert_eq!(Crc32.compute(b"123456789"), 0xCBF4_3926);
  /// assert_eq!(Crc32.compute(b""), 0);
  /// assert_eq!(Crc32.generator_polynomial(), 0xEDB8_8320);
  /// ```
  pub struct Crc32 {
    model: CrcModel::CRC32,
  }
}
