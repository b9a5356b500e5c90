//! Error types for checksum operations.
//!
//! Computing a checksum never fails. The only error in this crate is the
//! outcome of comparing a computed checksum against an expected one.
//! Individual crates may define additional errors as needed.

use core::fmt;

/// Checksum verification failed.
///
/// Returned by [`ChecksumExt::verify`](crate::ChecksumExt::verify) when the
/// checksum of the data differs from the expected value. Intentionally
/// opaque: callers that need the actual value can compute it directly.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: u32, expected: u32) -> Result<(), VerificationError> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(verify(1, 2).is_err());
/// assert!(verify(7, 7).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("checksum mismatch")
  }
}

impl core::error::Error for VerificationError {}
