//! Fletcher and Adler position-weighted sums.
//!
//! Each keeps two running sums: `s1` over the bytes, `s2` over the
//! successive values of `s1`, both reduced modulo a per-algorithm constant
//! after every byte. The result packs `s2` above `s1`.
//!
//! | Type | Modulus | Initial `(s1, s2)` | Output |
//! |------|---------|--------------------|--------|
//! | [`Fletcher16`] | 255 | (0, 0) | `(s2 << 8) \| s1` |
//! | [`Fletcher32`] | 65535 | (0, 0) | `(s2 << 16) \| s1` |
//! | [`Adler32`] | 65521 | (1, 0) | `(s2 << 16) \| s1` |
//!
//! Fletcher-32 here consumes single bytes, not 16-bit words.

use traits::Checksum;

/// Run the two-sum recurrence over `data`.
#[inline]
fn weighted_sums(data: &[u8], modulus: u32, s1: u32, s2: u32) -> (u32, u32) {
  data.iter().fold((s1, s2), |(s1, s2), &b| {
    let s1 = (s1 + u32::from(b)) % modulus;
    (s1, (s2 + s1) % modulus)
  })
}

/// Fletcher-16 checksum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fletcher16;

impl Fletcher16 {
  /// Reduction modulus for both sums.
  pub const MODULUS: u32 = 255;
}

impl Checksum for Fletcher16 {
  const NAME: &'static str = "fletcher16";
  type Output = u16;

  #[inline]
  fn compute(&self, data: &[u8]) -> u16 {
    let (s1, s2) = weighted_sums(data, Self::MODULUS, 0, 0);
    // Both sums are below 255, so the packed value fits in 16 bits.
    ((s2 << 8) | s1) as u16
  }
}

/// Fletcher-32 checksum over single bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fletcher32;

impl Fletcher32 {
  /// Reduction modulus for both sums.
  pub const MODULUS: u32 = 65_535;
}

impl Checksum for Fletcher32 {
  const NAME: &'static str = "fletcher32";
  type Output = u32;

  #[inline]
  fn compute(&self, data: &[u8]) -> u32 {
    let (s1, s2) = weighted_sums(data, Self::MODULUS, 0, 0);
    (s2 << 16) | s1
  }
}

/// Adler-32 checksum (RFC 1950, zlib).
///
/// # Example
///
/// ```
/// use checksum::{Adler32, Checksum};
///
/// assert_eq!(Adler32.compute(b""), 1);
/// assert_eq!(Adler32.compute_str("Test String Adler32"), 0x451D_06A5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Adler32;

impl Adler32 {
  /// Largest prime below 2^16.
  pub const MODULUS: u32 = 65_521;
}

impl Checksum for Adler32 {
  const NAME: &'static str = "adler32";
  type Output = u32;

  #[inline]
  fn compute(&self, data: &[u8]) -> u32 {
    let (s1, s2) = weighted_sums(data, Self::MODULUS, 1, 0);
    (s2 << 16) | s1
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BYTES: [u8; 11] = [1, 2, 3, 4, 42, 81, 34, 12, 76, 34, 23];

  #[test]
  fn empty_input_identity() {
    assert_eq!(Fletcher16.compute(&[]), 0);
    assert_eq!(Fletcher32.compute(&[]), 0);
    assert_eq!(Adler32.compute(&[]), 1);
  }

  #[test]
  fn byte_vector() {
    assert_eq!(Fletcher16.compute(&BYTES), 33_849);
    assert_eq!(Fletcher32.compute(&BYTES), 92_209_464);
    assert_eq!(Adler32.compute(&BYTES), 92_930_361);
  }

  #[test]
  fn string_vector() {
    assert_eq!(Fletcher16.compute_str("abcdef"), 8279);
    assert_eq!(Fletcher32.compute_str("abcdef"), 135_791_189);
    assert_eq!(Adler32.compute_str("abcdef"), 136_184_406);
    assert_eq!(Adler32.compute_str("Test String Adler32"), 1_159_530_149);
  }

  #[test]
  fn check_input() {
    assert_eq!(Fletcher16.compute(b"123456789"), 0x1EDE);
    assert_eq!(Fletcher32.compute(b"123456789"), 0x0915_01DD);
    assert_eq!(Adler32.compute(b"123456789"), 0x091E_01DE);
  }

  #[test]
  fn sums_stay_below_modulus() {
    let data = [0xFFu8; 4096];
    let f16 = Fletcher16.compute(&data);
    assert!(u32::from(f16 & 0xFF) < Fletcher16::MODULUS);
    assert!(u32::from(f16 >> 8) < Fletcher16::MODULUS);

    let adler = Adler32.compute(&data);
    assert!((adler & 0xFFFF) < Adler32::MODULUS);
    assert!((adler >> 16) < Adler32::MODULUS);
  }

  #[test]
  fn order_sensitive_unlike_plain_sum() {
    assert_ne!(Fletcher16.compute(&[1, 2]), Fletcher16.compute(&[2, 1]));
    assert_ne!(Adler32.compute(&[1, 2]), Adler32.compute(&[2, 1]));
  }
}
