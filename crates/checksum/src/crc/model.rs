//! CRC model parameters.
//!
//! A [`CrcModel`] is the small per-variant policy that turns the one
//! bit-serial division engine into a concrete CRC: the generator polynomial,
//! register initialisation, final XOR, bit order, and whether the message
//! length is folded into the division after the data.
//!
//! Parameter names follow the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use super::{
  CrcKernel, bitwise,
  tables::{self, table_lsb, table_msb},
};

/// Order in which the bits of each input byte enter the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitOrder {
  /// Most-significant bit first; the register shifts left (non-reflected CRCs).
  MsbFirst,
  /// Least-significant bit first; the register shifts right (reflected CRCs).
  LsbFirst,
}

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `polynomial`: generator polynomial in normal form, without the implicit `x^32` term
/// - `initial`: initial register value
/// - `xor_out`: value XORed into the register after the drain
/// - `bit_order`: MSB-first or LSB-first (reflected) processing
/// - `length_suffix`: fold the byte count into the division (POSIX `cksum`)
///
/// # Reflection
///
/// "Reflected" means bit-reversed. LSB-first models divide by the reflected
/// polynomial, which is what [`generator`](Self::generator) reports for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcModel {
  /// Canonical lowercase name.
  pub name: &'static str,
  /// Generator polynomial in normal (MSB-first) form.
  pub polynomial: u32,
  /// Initial value for the CRC register.
  pub initial: u32,
  /// XOR value applied to the drained register.
  pub xor_out: u32,
  /// Bit order of the division.
  pub bit_order: BitOrder,
  /// Append the message length (least-significant byte first, significant bytes only).
  pub length_suffix: bool,
  /// Byte-at-a-time lookup table for the table kernel.
  pub table: &'static [u32; 256],
}

const CKSUM_TABLE: [u32; 256] = table_msb(0x04C1_1DB7);
const CRC32_TABLE: [u32; 256] = table_lsb(0xEDB8_8320);

impl CrcModel {
  /// POSIX `cksum` (GNU coreutils) - CRC-32/CKSUM with the length suffix.
  pub const CKSUM: Self = Self {
    name: "cksum",
    polynomial: 0x04C1_1DB7,
    initial: 0x0000_0000,
    xor_out: 0xFFFF_FFFF,
    bit_order: BitOrder::MsbFirst,
    length_suffix: true,
    table: &CKSUM_TABLE,
  };

  /// CRC-32 (ISO-HDLC) - Ethernet, zip, gzip, PNG
  pub const CRC32: Self = Self {
    name: "crc32",
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
    bit_order: BitOrder::LsbFirst,
    length_suffix: false,
    table: &CRC32_TABLE,
  };

  /// The polynomial in the form the division loop consumes.
  ///
  /// Normal form for MSB-first models, bit-reversed for LSB-first ones.
  #[inline]
  #[must_use]
  pub const fn generator(&self) -> u32 {
    match self.bit_order {
      BitOrder::MsbFirst => self.polynomial,
      BitOrder::LsbFirst => self.polynomial.reverse_bits(),
    }
  }

  /// Feed `data` through the register with the given kernel.
  #[inline]
  #[must_use]
  pub fn update(&self, kernel: CrcKernel, crc: u32, data: &[u8]) -> u32 {
    match (kernel, self.bit_order) {
      (CrcKernel::Bitwise, BitOrder::MsbFirst) => bitwise::update_msb(self.generator(), crc, data),
      (CrcKernel::Bitwise, BitOrder::LsbFirst) => bitwise::update_lsb(self.generator(), crc, data),
      (CrcKernel::Table, BitOrder::MsbFirst) => tables::update_msb(crc, data, self.table),
      (CrcKernel::Table, BitOrder::LsbFirst) => tables::update_lsb(crc, data, self.table),
    }
  }

  /// Compute the finished checksum of `data` with the given kernel.
  ///
  /// Initialise, divide the data, drain the length suffix if the model has
  /// one, then apply the final XOR. Every kernel yields the same value.
  #[must_use]
  pub fn checksum_with(&self, kernel: CrcKernel, data: &[u8]) -> u32 {
    let mut crc = self.update(kernel, self.initial, data);
    if self.length_suffix {
      let (bytes, used) = length_bytes(data.len());
      let (suffix, _) = bytes.split_at(used);
      crc = self.update(kernel, crc, suffix);
    }
    crc ^ self.xor_out
  }

  /// Compute the finished checksum with the bitwise engine, at compile time if needed.
  #[must_use]
  pub const fn checksum_bitwise(&self, data: &[u8]) -> u32 {
    let poly = self.generator();
    let mut crc = match self.bit_order {
      BitOrder::MsbFirst => bitwise::update_msb(poly, self.initial, data),
      BitOrder::LsbFirst => bitwise::update_lsb(poly, self.initial, data),
    };
    if self.length_suffix {
      let (bytes, used) = length_bytes(data.len());
      let (suffix, _) = bytes.split_at(used);
      crc = match self.bit_order {
        BitOrder::MsbFirst => bitwise::update_msb(poly, crc, suffix),
        BitOrder::LsbFirst => bitwise::update_lsb(poly, crc, suffix),
      };
    }
    crc ^ self.xor_out
  }
}

/// Encode a message length as the POSIX `cksum` suffix.
///
/// Returns the little-endian bytes of `len` and how many of them are
/// significant; a zero length has no significant bytes.
#[inline]
#[must_use]
const fn length_bytes(len: usize) -> ([u8; 8], usize) {
  let len = len as u64;
  let used = 8 - (len.leading_zeros() / 8) as usize;
  (len.to_le_bytes(), used)
}

// Check values with the model drains applied.
const _: () = assert!(CrcModel::CRC32.checksum_bitwise(b"123456789") == 0xCBF4_3926);
const _: () = assert!(CrcModel::CKSUM.checksum_bitwise(b"123456789") == 0x377A_6011);
const _: () = assert!(CrcModel::CKSUM.checksum_bitwise(b"") == 0xFFFF_FFFF);
const _: () = assert!(CrcModel::CRC32.checksum_bitwise(b"") == 0x0000_0000);
