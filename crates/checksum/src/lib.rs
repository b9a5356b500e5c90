//! Non-cryptographic checksums with a uniform one-shot API.
//!
//! This crate provides running sums, Fletcher/Adler weighted sums, XOR and
//! SYSV checksums, and cyclic redundancy checks built on a const bit-serial
//! division engine with a table kernel for longer inputs. Every algorithm is
//! a zero-sized value implementing [`Checksum`].
//!
//! # Supported Algorithms
//!
//! | Type | Output | Empty input | Notes |
//! |------|--------|-------------|-------|
//! | [`Sum8`] | `u8` | 0 | byte sum mod 2^8 |
//! | [`Sum16`] | `u16` | 0 | byte sum mod 2^16 |
//! | [`Sum32`] | `u32` | 0 | byte sum mod 2^24 |
//! | [`Xor8`] | `u8` | 0 | longitudinal parity |
//! | [`BsdSum`] | `u16` | 0 | BSD `sum` |
//! | [`Sysv`] | `u32` | 0 | System V `sum -s` |
//! | [`Fletcher16`] | `u16` | 0 | mod 255 |
//! | [`Fletcher32`] | `u32` | 0 | mod 65535, byte-wise |
//! | [`Adler32`] | `u32` | 1 | zlib, RFC 1950 |
//! | [`Cksum`] | `u32` | `0xFFFFFFFF` | POSIX `cksum`, poly 0x04C11DB7 |
//! | [`Crc32`] | `u32` | 0 | ISO-HDLC (zip, gzip, PNG), poly 0xEDB88320 |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Adler32, Checksum, ChecksumExt, Crc, Crc32};
//!
//! let data = [1u8, 2, 3, 4, 42, 81, 34, 12, 76, 34, 23];
//! assert_eq!(Adler32.compute(&data), 92_930_361);
//! assert_eq!(Adler32.hex(&data), "58a0139");
//!
//! // Strings are checksummed as their raw bytes.
//! assert_eq!(Crc32.compute_str("abcdef"), Crc32.compute(b"abcdef"));
//! assert_eq!(Crc32.generator_polynomial(), 0xEDB8_8320);
//!
//! // Picking an algorithm at run time.
//! let algo: checksum::Algorithm = "cksum".parse()?;
//! assert_eq!(algo.hex_str("abcdef"), "2e152bb1");
//! # Ok::<(), checksum::ParseAlgorithmError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Hex rendering needs `alloc`; reading
//! CRC configuration from the environment needs `std`:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod algorithm;
pub mod crc;
mod fletcher;
mod sum;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use crc::{Cksum, Crc32, CrcConfig, CrcForce, CrcKernel, CrcModel};
pub use fletcher::{Adler32, Fletcher16, Fletcher32};
pub use sum::{BsdSum, Sum8, Sum16, Sum32, Sysv, Xor8};
// Re-export traits for convenience
#[cfg(feature = "alloc")]
pub use traits::hex;
pub use traits::{Checksum, ChecksumExt, ChecksumWord, Crc, VerificationError};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
