//! Table-less bit-serial CRC division.
//!
//! This is the reference engine: it processes one bit at a time and mirrors
//! the polynomial long division directly, so it is the source of truth the
//! table kernel is checked against.
//!
//! # Algorithm
//!
//! Each bit step uses branchless conditional reduction:
//!
//! ```text
//! MSB-first:  mask = 0 - (crc >> 31);  crc = (crc << 1) ^ (poly & mask)
//! LSB-first:  mask = 0 - (crc & 1);    crc = (crc >> 1) ^ (poly & mask)
//! ```
//!
//! The two directions share nothing but the shape: MSB-first aligns each
//! input byte with the top of the register and consumes the normal
//! polynomial, LSB-first aligns it with the bottom and consumes the
//! bit-reflected polynomial.
//!
//! All functions are `const fn` so check values can be verified at compile
//! time (see the bottom of this module).

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Shift one byte into an MSB-first register.
#[inline]
#[must_use]
pub const fn update_byte_msb(poly: u32, mut crc: u32, byte: u8) -> u32 {
  crc ^= (byte as u32) << 24;
  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(crc >> 31);
    crc = (crc << 1) ^ (poly & mask);
    bit += 1;
  }
  crc
}

/// Shift one byte into an LSB-first (reflected) register.
#[inline]
#[must_use]
pub const fn update_byte_lsb(poly: u32, mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;
  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (poly & mask);
    bit += 1;
  }
  crc
}

/// Divide `data` through an MSB-first register.
///
/// Returns the raw register; the caller applies any final XOR.
///
/// ```
/// use checksum::crc::bitwise::update_msb;
///
/// // CRC-32/CKSUM without the length suffix.
/// assert_eq!(!update_msb(0x04C1_1DB7, 0, b"123456789"), 0x765E_7680);
/// ```
#[must_use]
pub const fn update_msb(poly: u32, mut crc: u32, data: &[u8]) -> u32 {
  let mut i = 0;
  while i < data.len() {
    crc = update_byte_msb(poly, crc, data[i]);
    i += 1;
  }
  crc
}

/// Divide `data` through an LSB-first (reflected) register.
///
/// Returns the raw register; the caller applies any final XOR.
///
/// ```
/// use checksum::crc::bitwise::update_lsb;
///
/// assert_eq!(!update_lsb(0xEDB8_8320, !0, b"123456789"), 0xCBF4_3926);
/// ```
#[must_use]
pub const fn update_lsb(poly: u32, mut crc: u32, data: &[u8]) -> u32 {
  let mut i = 0;
  while i < data.len() {
    crc = update_byte_lsb(poly, crc, data[i]);
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32/CKSUM (no length suffix): poly=0x04C11DB7, init=0, xorout=0xFFFFFFFF
const _: () = assert!(!update_msb(0x04C1_1DB7, 0, CHECK_INPUT) == 0x765E_7680);

// CRC-32/ISO-HDLC: reflected poly=0xEDB88320, init=0xFFFFFFFF, xorout=0xFFFFFFFF
const _: () = assert!(!update_lsb(0xEDB8_8320, !0, CHECK_INPUT) == 0xCBF4_3926);

#[cfg(test)]
mod tests {
  use super::*;

  /// Plain shift-and-branch MSB-first division, written independently.
  fn naive_msb(poly: u32, init: u32, data: &[u8]) -> u32 {
    let mut crc = init;
    for &b in data {
      for i in (0..8).rev() {
        let bit = u32::from((b >> i) & 1);
        let top = crc >> 31;
        crc <<= 1;
        if (top ^ bit) != 0 {
          crc ^= poly;
        }
      }
    }
    crc
  }

  fn naive_lsb(poly: u32, init: u32, data: &[u8]) -> u32 {
    let mut crc = init;
    for &b in data {
      for i in 0..8 {
        let bit = u32::from((b >> i) & 1);
        let low = crc & 1;
        crc >>= 1;
        if (low ^ bit) != 0 {
          crc ^= poly;
        }
      }
    }
    crc
  }

  #[test]
  fn empty_input_leaves_register_untouched() {
    assert_eq!(update_msb(0x04C1_1DB7, 0, b""), 0);
    assert_eq!(update_lsb(0xEDB8_8320, !0, b""), !0);
    assert_eq!(update_msb(0x04C1_1DB7, 0x1234_5678, b""), 0x1234_5678);
  }

  #[test]
  fn zero_byte_into_zero_register_stays_zero() {
    assert_eq!(update_byte_msb(0x04C1_1DB7, 0, 0), 0);
    assert_eq!(update_byte_lsb(0xEDB8_8320, 0, 0), 0);
  }

  #[test]
  fn single_byte_matches_table_entry() {
    // A lone bit that reaches the far end of the register on the last step reduces to the polynomial.
    assert_eq!(update_byte_msb(0x04C1_1DB7, 0, 0x01), 0x04C1_1DB7);
    assert_eq!(update_byte_lsb(0xEDB8_8320, 0, 0x80), 0xEDB8_8320);
  }

  #[test]
  fn branchless_matches_naive_division() {
    let data: [u8; 11] = [1, 2, 3, 4, 42, 81, 34, 12, 76, 34, 23];
    for init in [0u32, !0, 0xDEAD_BEEF] {
      assert_eq!(update_msb(0x04C1_1DB7, init, &data), naive_msb(0x04C1_1DB7, init, &data));
      assert_eq!(update_lsb(0xEDB8_8320, init, &data), naive_lsb(0xEDB8_8320, init, &data));
    }
  }

  #[test]
  fn split_updates_equal_whole() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let (a, b) = data.split_at(17);
    assert_eq!(
      update_msb(0x04C1_1DB7, update_msb(0x04C1_1DB7, 0, a), b),
      update_msb(0x04C1_1DB7, 0, data)
    );
    assert_eq!(
      update_lsb(0xEDB8_8320, update_lsb(0xEDB8_8320, !0, a), b),
      update_lsb(0xEDB8_8320, !0, data)
    );
  }
}
