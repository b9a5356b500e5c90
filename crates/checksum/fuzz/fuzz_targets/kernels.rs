//! Fuzz target for CRC kernel equivalence.
//!
//! The bit-serial and table kernels must agree on every input, and the
//! configured dispatch must agree with both.

#![no_main]

use checksum::{Checksum, Cksum, Crc32, CrcKernel};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let bitwise = Crc32::compute_with(CrcKernel::Bitwise, data);
  let table = Crc32::compute_with(CrcKernel::Table, data);
  assert_eq!(bitwise, table, "crc32 kernels disagree, len={}", data.len());
  assert_eq!(Crc32.compute(data), table);

  let bitwise = Cksum::compute_with(CrcKernel::Bitwise, data);
  let table = Cksum::compute_with(CrcKernel::Table, data);
  assert_eq!(bitwise, table, "cksum kernels disagree, len={}", data.len());
  assert_eq!(Cksum.compute(data), table);
});
