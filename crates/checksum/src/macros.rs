//! Internal macros for CRC variant generation.
//!
//! Every CRC variant is a zero-sized type whose behavior comes entirely from
//! its [`CrcModel`](crate::crc::CrcModel); this macro stamps out the type and
//! its trait implementations.

/// Generate a CRC type with all trait implementations.
///
/// This macro creates:
/// - The zero-sized struct definition
/// - `MODEL`, `config()`, `kernel_name_for_len()`, `compute_with()` items
/// - `Checksum` trait implementation
/// - `Crc` trait implementation
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Cksum`)
/// - `$model`: The model constant (e.g., `CrcModel::CKSUM`)
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      model: $model:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    $vis struct $name;

    impl $name {
      /// Parameters driving this CRC.
      pub const MODEL: $crate::crc::CrcModel = $model;

      /// Get the effective CRC configuration (overrides + thresholds).
      #[must_use]
      pub fn config() -> $crate::crc::CrcConfig {
        $crate::crc::config::get()
      }

      /// Returns the kernel name that the selector would choose for `len`.
      ///
      /// This is intended for debugging/benchmarking and does not allocate.
      #[must_use]
      pub fn kernel_name_for_len(len: usize) -> &'static str {
        Self::config().kernel_for_len(len).name()
      }

      /// Compute the checksum with an explicit kernel, bypassing selection.
      #[must_use]
      pub fn compute_with(kernel: $crate::crc::CrcKernel, data: &[u8]) -> u32 {
        Self::MODEL.checksum_with(kernel, data)
      }
    }

    impl $crate::Checksum for $name {
      const NAME: &'static str = Self::MODEL.name;
      type Output = u32;

      #[inline]
      fn compute(&self, data: &[u8]) -> u32 {
        let kernel = Self::config().kernel_for_len(data.len());
        Self::MODEL.checksum_with(kernel, data)
      }
    }

    impl $crate::Crc for $name {
      const GENERATOR: u32 = Self::MODEL.generator();
    }
  };
}
