//! Hexadecimal rendering of checksum values.
//!
//! Two distinct operations:
//!
//! | Function | Input | Padding | Example |
//! |----------|-------|---------|---------|
//! | [`to_hex`] | one value | none | `42u8` → `"2a"` |
//! | [`to_hex_padded`] | slice of values | `2 × size_of::<T>()` digits each | `[12u8, 255]` → `"0cff"` |
//!
//! Both emit lowercase digits without a `0x` prefix.

use alloc::string::String;
use core::fmt::Write;

use crate::ChecksumWord;

/// Render a single value as lowercase hex with no padding and no prefix.
///
/// ```
/// use traits::hex::to_hex;
///
/// assert_eq!(to_hex(0u32), "0");
/// assert_eq!(to_hex(1234u32), "4d2");
/// assert_eq!(to_hex(42u8), "2a");
/// ```
#[must_use]
pub fn to_hex<W: ChecksumWord>(value: W) -> String {
  let mut out = String::with_capacity(W::BYTES * 2);
  // Formatting into a `String` cannot fail.
  let _ = write!(out, "{value:x}");
  out
}

/// Render a slice of values as concatenated lowercase hex, each element
/// zero-padded to twice its byte width.
///
/// ```
/// use traits::hex::to_hex_padded;
///
/// assert_eq!(to_hex_padded::<u8>(&[]), "");
/// assert_eq!(to_hex_padded(&[12u8, 255]), "0cff");
/// assert_eq!(to_hex_padded(&[12u32]), "0000000c");
/// ```
#[must_use]
pub fn to_hex_padded<W: ChecksumWord>(values: &[W]) -> String {
  let width = W::BYTES * 2;
  let mut out = String::with_capacity(values.len() * width);
  for value in values {
    let _ = write!(out, "{value:0width$x}");
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn scalar_is_never_padded() {
    assert_eq!(to_hex(1234u32), "4d2");
    assert_eq!(to_hex(1_234_567_890u64), "499602d2");
    assert_eq!(to_hex(0u32), "0");
    assert_eq!(to_hex(u32::MAX), "ffffffff");
    assert_eq!(to_hex(u32::MAX - 1), "fffffffe");
    assert_eq!(to_hex(42u8), "2a");
    assert_eq!(to_hex(12345u16), "3039");
    assert_eq!(to_hex(1u16), "1");
  }

  #[test]
  fn byte_slices_pad_to_two_digits() {
    assert!(to_hex_padded::<u8>(&[]).is_empty());
    assert_eq!(to_hex_padded(&[12u8]), "0c");
    assert_eq!(to_hex_padded(&[12u8, 255]), "0cff");
    assert_eq!(to_hex_padded(&[128u8, 2, u8::MAX]), "8002ff");
  }

  #[test]
  fn wide_slices_pad_to_type_width() {
    assert!(to_hex_padded::<u32>(&[]).is_empty());
    assert_eq!(to_hex_padded(&[12u32]), "0000000c");
    assert_eq!(to_hex_padded(&[12u32, 255]), "0000000c000000ff");
    assert_eq!(to_hex_padded(&[128u32, 2, u32::MAX]), "0000008000000002ffffffff");
    assert_eq!(to_hex_padded(&[0xABu16]), "00ab");
  }
}
