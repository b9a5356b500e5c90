//! Non-cryptographic checksum traits.
//!
//! Traits for one-shot checksum algorithms: running sums, Fletcher/Adler
//! sums, and polynomial-division CRCs.
//!
//! - **Stateless**: algorithm values carry no mutable state and can be shared freely
//! - **Total**: every byte sequence, including the empty one, has a checksum
//! - **One-shot**: each call processes a complete, fully buffered input

use core::fmt::Debug;

use crate::{ChecksumWord, VerificationError};

/// Non-cryptographic checksum algorithm.
///
/// An implementor is a unit value describing *which* algorithm to run; the
/// accumulator lives on the stack of [`compute`](Self::compute) for the
/// duration of a single call. One instance may be reused across any number
/// of inputs, from any number of threads.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Adler32, Checksum, ChecksumExt};
///
/// let adler = Adler32;
/// assert_eq!(adler.compute(b"abcdef"), 136_184_406);
/// assert_eq!(adler.compute_str("abcdef"), 136_184_406);
/// assert_eq!(adler.hex(b"abcdef"), "81e0256");
/// ```
///
/// # Implementor Requirements
///
/// - `compute()` must be pure: identical input yields identical output
/// - `compute()` must be total: the empty slice yields the algorithm's identity value
/// - accumulator overflow wraps; it is never an error
pub trait Checksum: Copy + Default + Debug + Send + Sync {
  /// Canonical lowercase algorithm name (e.g. `"adler32"`).
  const NAME: &'static str;

  /// Output size in bytes.
  ///
  /// - Sum8, XOR8: 1
  /// - Sum16, BSD sum, Fletcher-16: 2
  /// - Sum32, SYSV, Fletcher-32, Adler-32, CRC-32: 4
  const OUTPUT_SIZE: usize = <Self::Output as ChecksumWord>::BYTES;

  /// The checksum output type.
  ///
  /// Always an unsigned integer whose width matches the algorithm.
  type Output: ChecksumWord;

  /// Compute the checksum of a byte sequence.
  #[must_use]
  fn compute(&self, data: &[u8]) -> Self::Output;

  /// Compute the checksum of a string.
  ///
  /// The string is taken as its raw UTF-8 bytes with no trimming or
  /// normalization, so this always equals `compute(text.as_bytes())`.
  #[inline]
  #[must_use]
  fn compute_str(&self, text: &str) -> Self::Output {
    self.compute(text.as_bytes())
  }
}

/// Operations derived from [`Checksum::compute`].
///
/// Blanket-implemented for every [`Checksum`]; it cannot be implemented (and
/// so cannot be overridden) by individual algorithms.
pub trait ChecksumExt: Checksum {
  /// Compute the checksum of `data` and render it as unpadded lowercase hex.
  #[cfg(feature = "alloc")]
  #[must_use]
  fn hex(&self, data: &[u8]) -> alloc::string::String;

  /// Compute the checksum of `text` and render it as unpadded lowercase hex.
  #[cfg(feature = "alloc")]
  #[must_use]
  fn hex_str(&self, text: &str) -> alloc::string::String;

  /// Check that `data` has the checksum `expected`.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if the computed checksum differs.
  fn verify(&self, data: &[u8], expected: Self::Output) -> Result<(), VerificationError>;

  /// Check that `text` has the checksum `expected`.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if the computed checksum differs.
  fn verify_str(&self, text: &str, expected: Self::Output) -> Result<(), VerificationError>;
}

impl<C: Checksum> ChecksumExt for C {
  #[cfg(feature = "alloc")]
  #[inline]
  fn hex(&self, data: &[u8]) -> alloc::string::String {
    crate::hex::to_hex(self.compute(data))
  }

  #[cfg(feature = "alloc")]
  #[inline]
  fn hex_str(&self, text: &str) -> alloc::string::String {
    crate::hex::to_hex(self.compute_str(text))
  }

  #[inline]
  fn verify(&self, data: &[u8], expected: Self::Output) -> Result<(), VerificationError> {
    if self.compute(data) == expected {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }

  #[inline]
  fn verify_str(&self, text: &str, expected: Self::Output) -> Result<(), VerificationError> {
    self.verify(text.as_bytes(), expected)
  }
}

/// Cyclic redundancy checks.
///
/// A CRC is a checksum computed by polynomial division over GF(2). The
/// generator polynomial fully parameterizes the division step and is fixed
/// per algorithm type.
///
/// # Mathematical Background
///
/// ```text
/// crc(M) = M(x) * x^32 mod G(x)
/// ```
///
/// Reflected (LSB-first) CRCs report the bit-reversed generator, which is the
/// form their shift-right division loop consumes directly.
pub trait Crc: Checksum<Output = u32> {
  /// The generator polynomial, without the implicit `x^32` term.
  ///
  /// - cksum (POSIX): `0x04C11DB7`
  /// - CRC-32 (ISO-HDLC, reflected): `0xEDB88320`
  const GENERATOR: u32;

  /// Returns [`GENERATOR`](Self::GENERATOR).
  #[inline]
  #[must_use]
  fn generator_polynomial(&self) -> u32 {
    Self::GENERATOR
  }
}
