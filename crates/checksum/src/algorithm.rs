//! Run-time algorithm selection.
//!
//! [`Algorithm`] is the tagged set of every checksum in this crate. It exists
//! for call sites that pick an algorithm by name or configuration; each
//! variant dispatches once to the concrete zero-sized type, so there is no
//! dynamic dispatch inside the byte loop.
//!
//! # Example
//!
//! ```
//! use checksum::Algorithm;
//!
//! let algo: Algorithm = "crc-32".parse()?;
//! assert_eq!(algo, Algorithm::Crc32);
//! assert_eq!(algo.compute(b"abcdef"), 0x4B8E_39EF);
//! assert_eq!(algo.generator_polynomial(), Some(0xEDB8_8320));
//! # Ok::<(), checksum::ParseAlgorithmError>(())
//! ```

use core::{fmt, str::FromStr};

use traits::{Checksum, Crc, VerificationError};

use crate::{Adler32, BsdSum, Cksum, Crc32, Fletcher16, Fletcher32, Sum8, Sum16, Sum32, Sysv, Xor8};

/// Every checksum algorithm in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
  /// [`Sum8`]
  Sum8,
  /// [`Sum16`]
  Sum16,
  /// [`Sum32`]
  Sum32,
  /// [`Xor8`]
  Xor8,
  /// [`BsdSum`]
  BsdSum,
  /// [`Sysv`]
  Sysv,
  /// [`Fletcher16`]
  Fletcher16,
  /// [`Fletcher32`]
  Fletcher32,
  /// [`Adler32`]
  Adler32,
  /// [`Cksum`]
  Cksum,
  /// [`Crc32`]
  Crc32,
}

/// Dispatch `$body` with `$algo` bound to the concrete algorithm value.
macro_rules! with_algorithm {
  ($self:expr, $algo:ident => $body:expr) => {
    match $self {
      Algorithm::Sum8 => {
        let $algo = Sum8;
        $body
      }
      Algorithm::Sum16 => {
        let $algo = Sum16;
        $body
      }
      Algorithm::Sum32 => {
        let $algo = Sum32;
        $body
      }
      Algorithm::Xor8 => {
        let $algo = Xor8;
        $body
      }
      Algorithm::BsdSum => {
        let $algo = BsdSum;
        $body
      }
      Algorithm::Sysv => {
        let $algo = Sysv;
        $body
      }
      Algorithm::Fletcher16 => {
        let $algo = Fletcher16;
        $body
      }
      Algorithm::Fletcher32 => {
        let $algo = Fletcher32;
        $body
      }
      Algorithm::Adler32 => {
        let $algo = Adler32;
        $body
      }
      Algorithm::Cksum => {
        let $algo = Cksum;
        $body
      }
      Algorithm::Crc32 => {
        let $algo = Crc32;
        $body
      }
    }
  };
}

/// Canonical name of a concrete algorithm, usable in a `const fn`.
const fn name_of<C: Checksum>(_: &C) -> &'static str {
  C::NAME
}

impl Algorithm {
  /// All algorithms, in a fixed order.
  pub const ALL: [Self; 11] = [
    Self::Sum8,
    Self::Sum16,
    Self::Sum32,
    Self::Xor8,
    Self::BsdSum,
    Self::Sysv,
    Self::Fletcher16,
    Self::Fletcher32,
    Self::Adler32,
    Self::Cksum,
    Self::Crc32,
  ];

  /// Canonical lowercase name (same as [`Checksum::NAME`]).
  #[must_use]
  pub const fn name(self) -> &'static str {
    with_algorithm!(self, algo => name_of(&algo))
  }

  /// Size of the native checksum in bytes.
  #[must_use]
  pub fn output_size(self) -> usize {
    with_algorithm!(self, algo => output_size_of(&algo))
  }

  /// Generator polynomial for CRC algorithms, `None` for the sums.
  #[must_use]
  pub fn generator_polynomial(self) -> Option<u32> {
    match self {
      Self::Cksum => Some(Cksum.generator_polynomial()),
      Self::Crc32 => Some(Crc32.generator_polynomial()),
      _ => None,
    }
  }

  /// Compute the checksum of `data`, widened to `u32`.
  #[must_use]
  pub fn compute(self, data: &[u8]) -> u32 {
    with_algorithm!(self, algo => u32::from(algo.compute(data)))
  }

  /// Compute the checksum of `text`, widened to `u32`.
  #[must_use]
  pub fn compute_str(self, text: &str) -> u32 {
    with_algorithm!(self, algo => u32::from(algo.compute_str(text)))
  }

  /// Compute the checksum of `data` as unpadded lowercase hex.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn hex(self, data: &[u8]) -> alloc::string::String {
    with_algorithm!(self, algo => traits::ChecksumExt::hex(&algo, data))
  }

  /// Compute the checksum of `text` as unpadded lowercase hex.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn hex_str(self, text: &str) -> alloc::string::String {
    self.hex(text.as_bytes())
  }

  /// Check that `data` has the checksum `expected`.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if the computed checksum differs.
  pub fn verify(self, data: &[u8], expected: u32) -> Result<(), VerificationError> {
    if self.compute(data) == expected {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}

fn output_size_of<C: Checksum>(_: &C) -> usize {
  C::OUTPUT_SIZE
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.name())
  }
}

/// Unknown algorithm name.
///
/// Returned by [`Algorithm::from_str`] for a name that matches no algorithm
/// or alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ParseAlgorithmError;

impl fmt::Display for ParseAlgorithmError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown checksum algorithm")
  }
}

impl core::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
  type Err = ParseAlgorithmError;

  /// Parse a canonical name or a common alias, ignoring ASCII case and
  /// surrounding whitespace.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    const ALIASES: &[(&str, Algorithm)] = &[
      ("sum8", Algorithm::Sum8),
      ("sum-8", Algorithm::Sum8),
      ("sum16", Algorithm::Sum16),
      ("sum-16", Algorithm::Sum16),
      ("sum32", Algorithm::Sum32),
      ("sum-32", Algorithm::Sum32),
      ("xor8", Algorithm::Xor8),
      ("xor-8", Algorithm::Xor8),
      ("bsd", Algorithm::BsdSum),
      ("bsdsum", Algorithm::BsdSum),
      ("sum-r", Algorithm::BsdSum),
      ("sysv", Algorithm::Sysv),
      ("sum-s", Algorithm::Sysv),
      ("fletcher16", Algorithm::Fletcher16),
      ("fletcher-16", Algorithm::Fletcher16),
      ("fletcher32", Algorithm::Fletcher32),
      ("fletcher-32", Algorithm::Fletcher32),
      ("adler32", Algorithm::Adler32),
      ("adler-32", Algorithm::Adler32),
      ("cksum", Algorithm::Cksum),
      ("posix", Algorithm::Cksum),
      ("crc-32/cksum", Algorithm::Cksum),
      ("crc32", Algorithm::Crc32),
      ("crc-32", Algorithm::Crc32),
      ("crc-32/iso-hdlc", Algorithm::Crc32),
    ];

    let s = s.trim();
    ALIASES
      .iter()
      .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
      .map(|&(_, algo)| algo)
      .ok_or(ParseAlgorithmError)
  }
}
