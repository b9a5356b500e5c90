//! CRC runtime configuration (kernel override + threshold).
//!
//! This module centralizes the selection knobs shared by every CRC model:
//! - the length at which the table kernel takes over from the bitwise engine
//! - optional forced kernel selection
//!
//! Configuration only ever changes *which* kernel runs, never the result.
//!
//! # Environment
//!
//! With the `std` feature, overrides are read once from the environment:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CHECKSUM_CRC_FORCE` | `auto`, `bitwise` (`reference`, `bit`), `table` (`portable`, `lut`) |
//! | `CHECKSUM_CRC_THRESHOLD_BITWISE_TO_TABLE` | byte count |

use core::fmt;

use super::CrcKernel;

/// Default length at which [`CrcForce::Auto`] switches to the table kernel.
pub const DEFAULT_BITWISE_TO_TABLE: usize = 64;

/// Forced kernel selection for CRC models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CrcForce {
  /// Pick by input length.
  #[default]
  Auto,
  /// Always use the table-free bit-serial engine.
  Bitwise,
  /// Always use the byte-at-a-time table kernel.
  Table,
}

impl CrcForce {
  /// Lowercase name of the mode, as accepted by [`parse`](Self::parse).
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Table => "table",
    }
  }

  /// Parse an override value, case-insensitively. Blank or unknown values yield `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bitwise") || value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bit")
    {
      return Some(Self::Bitwise);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") || value.eq_ignore_ascii_case("lut")
    {
      return Some(Self::Table);
    }

    None
  }
}

impl fmt::Display for CrcForce {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// CRC selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcTunables {
  /// Bytes where the table kernel becomes faster than the bitwise engine.
  pub bitwise_to_table: usize,
}

impl Default for CrcTunables {
  fn default() -> Self {
    Self {
      bitwise_to_table: DEFAULT_BITWISE_TO_TABLE,
    }
  }
}

/// Full CRC runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CrcConfig {
  /// Requested force mode.
  pub force: CrcForce,
  /// Thresholds used by the selector.
  pub tunables: CrcTunables,
}

impl CrcConfig {
  /// The kernel this configuration selects for an input of `len` bytes.
  #[inline]
  #[must_use]
  pub const fn kernel_for_len(&self, len: usize) -> CrcKernel {
    match self.force {
      CrcForce::Bitwise => CrcKernel::Bitwise,
      CrcForce::Table => CrcKernel::Table,
      CrcForce::Auto => {
        if len < self.tunables.bitwise_to_table {
          CrcKernel::Bitwise
        } else {
          CrcKernel::Table
        }
      }
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overrides {
  force: Option<CrcForce>,
  bitwise_to_table: Option<usize>,
}

impl Overrides {
  fn apply(self) -> CrcConfig {
    let base = CrcConfig::default();
    CrcConfig {
      force: self.force.unwrap_or(base.force),
      tunables: CrcTunables {
        bitwise_to_table: self.bitwise_to_table.unwrap_or(base.tunables.bitwise_to_table),
      },
    }
  }
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn parse_usize(name: &str) -> Option<usize> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    value.parse::<usize>().ok()
  }

  fn parse_force(name: &str) -> Option<CrcForce> {
    let value = std::env::var(name).ok()?;
    CrcForce::parse(&value)
  }

  Overrides {
    force: parse_force("CHECKSUM_CRC_FORCE"),
    bitwise_to_table: parse_usize("CHECKSUM_CRC_THRESHOLD_BITWISE_TO_TABLE"),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Get the effective CRC configuration.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  overrides().apply()
}
