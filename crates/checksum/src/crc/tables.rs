//! Const-fn CRC lookup tables and the byte-at-a-time table kernel.
//!
//! Each table entry is the bitwise division of a single byte through a zero
//! register, so the table kernel is exactly eight bitwise steps folded into
//! one lookup. Tables are computed at compile time and embedded directly in
//! the binary (256 × `u32` = 1 KiB per model).
//!
//! | Bit order | Index | Update |
//! |-----------|-------|--------|
//! | MSB-first | `(crc >> 24) ^ b` | `(crc << 8) ^ T[i]` |
//! | LSB-first | `(crc ^ b) & 0xFF` | `(crc >> 8) ^ T[i]` |

// SAFETY: All array indexing in this module uses bounded loop indices (0..256)
// or values masked to 8 bits, so every index is in range for a 256-entry table.
#![allow(clippy::indexing_slicing)]

use super::bitwise::{update_byte_lsb, update_byte_msb};

/// Generate the 256-entry table for an MSB-first CRC.
#[must_use]
pub const fn table_msb(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = update_byte_msb(poly, 0, i as u8);
    i += 1;
  }
  table
}

/// Generate the 256-entry table for an LSB-first (reflected) CRC.
#[must_use]
pub const fn table_lsb(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = update_byte_lsb(poly, 0, i as u8);
    i += 1;
  }
  table
}

/// Table-driven MSB-first update.
#[inline]
#[must_use]
pub fn update_msb(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &byte in data {
    crc = (crc << 8) ^ table[((crc >> 24) ^ u32::from(byte)) as usize & 0xFF];
  }
  crc
}

/// Table-driven LSB-first update.
#[inline]
#[must_use]
pub fn update_lsb(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &byte in data {
    crc = (crc >> 8) ^ table[(crc ^ u32::from(byte)) as usize & 0xFF];
  }
  crc
}
