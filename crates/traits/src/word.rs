//! Unsigned integer widths a checksum may produce.
//!
//! Every checksum result is an unsigned integer whose width matches the
//! algorithm (8, 16, 32 or 64 bits). The constraint is enforced at the type
//! level: [`ChecksumWord`] is sealed and only implemented for the unsigned
//! primitives, so a signed or non-integral output type fails to compile.

use core::{
  fmt::{Debug, LowerHex, UpperHex},
  hash::Hash,
};

/// Sealed trait marker - not implementable outside this crate.
mod private {
  /// Sealed trait marker.
  pub trait Sealed {}
}

/// An unsigned integral checksum output.
///
/// # Stability
///
/// This trait is sealed - new methods may be added in minor versions.
pub trait ChecksumWord:
  private::Sealed + Copy + Eq + Ord + Hash + Debug + Default + LowerHex + UpperHex + Send + Sync + 'static
{
  /// Width in bits.
  const BITS: u32;

  /// Width in bytes.
  const BYTES: usize;

  /// The all-zero value.
  const ZERO: Self;

  /// Widen to `u64` without loss.
  #[must_use]
  fn to_u64(self) -> u64;
}

macro_rules! impl_checksum_word {
  ($($ty:ty),* $(,)?) => {
    $(
      impl private::Sealed for $ty {}

      impl ChecksumWord for $ty {
        const BITS: u32 = <$ty>::BITS;
        const BYTES: usize = core::mem::size_of::<$ty>();
        const ZERO: Self = 0;

        #[inline]
        fn to_u64(self) -> u64 {
          u64::from(self)
        }
      }
    )*
  };
}

impl_checksum_word!(u8, u16, u32, u64);
