//! Capability traits for the libchecksum algorithms.
//!
//! This crate provides the foundational traits every checksum in the
//! `checksum` crate conforms to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | One-shot checksum over a complete buffer | Sum8, Fletcher16, Adler32 |
//! | [`ChecksumExt`] | Derived operations (hex rendering, verification) | every [`Checksum`] |
//! | [`Crc`] | Checksums defined by a generator polynomial | cksum, CRC-32 |
//! | [`ChecksumWord`] | Unsigned integer widths a checksum may produce | `u8`, `u16`, `u32`, `u64` |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for a checksum that does not match
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod checksum;
pub mod error;
#[cfg(feature = "alloc")]
pub mod hex;
mod word;

pub use checksum::{Checksum, ChecksumExt, Crc};
pub use error::VerificationError;
pub use word::ChecksumWord;
