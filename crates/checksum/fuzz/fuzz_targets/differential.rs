//! Differential fuzzing against reference implementations.
//!
//! Compares CRC-32 against `crc32fast` and every other algorithm against a
//! straightforward model of its definition.

#![no_main]

use checksum::{Adler32, BsdSum, Checksum, Cksum, Crc32, Fletcher16, Fletcher32, Sum8, Sum16, Sum32, Sysv, Xor8};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_crc32_differential(data);
  test_sums(data);
  test_weighted(data);
  test_cksum_self_consistency(data);
});

fn test_crc32_differential(data: &[u8]) {
  let ours = Crc32.compute(data);
  let reference = crc32fast::hash(data);

  assert_eq!(
    ours,
    reference,
    "CRC32 differential mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );
}

fn test_sums(data: &[u8]) {
  let total: u64 = data.iter().map(|&b| u64::from(b)).sum();
  assert_eq!(u64::from(Sum8.compute(data)), total % (1 << 8));
  assert_eq!(u64::from(Sum16.compute(data)), total % (1 << 16));
  assert_eq!(u64::from(Sum32.compute(data)), total % (1 << 24));
  assert_eq!(Xor8.compute(data), data.iter().fold(0, |acc, &b| acc ^ b));

  let mut bsd = 0u16;
  for &b in data {
    bsd = bsd.rotate_right(1).wrapping_add(u16::from(b));
  }
  assert_eq!(BsdSum.compute(data), bsd);

  let s = total % (1 << 32);
  let r = (s & 0xFFFF) + (s >> 16);
  let folded = (r & 0xFFFF) + (r >> 16);
  assert_eq!(u64::from(Sysv.compute(data)), folded);
}

fn test_weighted(data: &[u8]) {
  let weighted = |modulus: u64, start: u64| {
    let (mut s1, mut s2) = (start, 0u64);
    for &b in data {
      s1 = (s1 + u64::from(b)) % modulus;
      s2 = (s2 + s1) % modulus;
    }
    (s2 << 16) | s1
  };

  let (f16, f32, adler) = (weighted(255, 0), weighted(65535, 0), weighted(65521, 1));
  assert_eq!(u64::from(Fletcher16.compute(data)), ((f16 >> 16) << 8) | (f16 & 0xFF));
  assert_eq!(u64::from(Fletcher32.compute(data)), f32);
  assert_eq!(u64::from(Adler32.compute(data)), adler);
}

fn test_cksum_self_consistency(data: &[u8]) {
  let mut crc = 0u32;
  let mut feed = |byte: u8| {
    crc ^= u32::from(byte) << 24;
    for _ in 0..8 {
      crc = if crc & 0x8000_0000 != 0 {
        (crc << 1) ^ 0x04C1_1DB7
      } else {
        crc << 1
      };
    }
  };
  data.iter().for_each(|&b| feed(b));
  let mut len = data.len();
  while len != 0 {
    feed(len as u8);
    len >>= 8;
  }
  assert_eq!(Cksum.compute(data), !crc, "cksum mismatch, len={}", data.len());
}
