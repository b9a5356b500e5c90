//! Every algorithm against a naive model of its definition, over
//! deterministic pseudo-random inputs.

use checksum::{
  Adler32, BsdSum, Checksum, Cksum, Crc32, CrcKernel, Fletcher16, Fletcher32, Sum8, Sum16, Sum32, Sysv, Xor8,
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

const LENGTHS: [usize; 17] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 70_000];
const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

fn for_each_input(mut f: impl FnMut(&[u8])) {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      f(&gen_bytes(len, seed ^ len as u64));
    }
  }
}

// Reference models, written against the arithmetic definitions with wide
// accumulators and explicit reductions.

fn sum_mod(data: &[u8], modulus: u64) -> u64 {
  data.iter().map(|&b| u64::from(b)).sum::<u64>() % modulus
}

fn bsd_reference(data: &[u8]) -> u16 {
  let mut acc: u32 = 0;
  for &b in data {
    acc = (acc >> 1) + ((acc & 1) << 15);
    acc = (acc + u32::from(b)) & 0xFFFF;
  }
  acc as u16
}

fn sysv_reference(data: &[u8]) -> u32 {
  let s = sum_mod(data, 1 << 32);
  let r = (s & 0xFFFF) + (s >> 16);
  ((r & 0xFFFF) + (r >> 16)) as u32
}

fn weighted_reference(data: &[u8], modulus: u64, s1_init: u64, shift: u32) -> u64 {
  let (mut s1, mut s2) = (s1_init, 0u64);
  for &b in data {
    s1 = (s1 + u64::from(b)) % modulus;
    s2 = (s2 + s1) % modulus;
  }
  (s2 << shift) | s1
}

fn cksum_reference(data: &[u8]) -> u32 {
  fn step(mut crc: u32, b: u8) -> u32 {
    for i in (0..8).rev() {
      let bit = u32::from((b >> i) & 1);
      let top = crc >> 31;
      crc <<= 1;
      if top ^ bit != 0 {
        crc ^= 0x04c1_1db7;
      }
    }
    crc
  }

  let mut crc = data.iter().fold(0u32, |crc, &b| step(crc, b));
  let mut len = data.len();
  while len != 0 {
    crc = step(crc, len as u8);
    len >>= 8;
  }
  !crc
}

fn crc32_reference(data: &[u8]) -> u32 {
  let mut crc = 0xffff_ffffu32;
  for &b in data {
    crc ^= u32::from(b);
    for _ in 0..8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (0xedb8_8320 & mask);
    }
  }
  crc ^ 0xffff_ffff
}

#[test]
fn running_sums_match_reference() {
  for_each_input(|data| {
    assert_eq!(u64::from(Sum8.compute(data)), sum_mod(data, 1 << 8), "sum8 len={}", data.len());
    assert_eq!(u64::from(Sum16.compute(data)), sum_mod(data, 1 << 16), "sum16 len={}", data.len());
    assert_eq!(u64::from(Sum32.compute(data)), sum_mod(data, 1 << 24), "sum32 len={}", data.len());
    assert_eq!(Xor8.compute(data), data.iter().fold(0, |a, &b| a ^ b), "xor8 len={}", data.len());
    assert_eq!(BsdSum.compute(data), bsd_reference(data), "bsd len={}", data.len());
    assert_eq!(Sysv.compute(data), sysv_reference(data), "sysv len={}", data.len());
  });
}

#[test]
fn weighted_sums_match_reference() {
  for_each_input(|data| {
    assert_eq!(
      u64::from(Fletcher16.compute(data)),
      weighted_reference(data, 255, 0, 8),
      "fletcher16 len={}",
      data.len()
    );
    assert_eq!(
      u64::from(Fletcher32.compute(data)),
      weighted_reference(data, 65_535, 0, 16),
      "fletcher32 len={}",
      data.len()
    );
    assert_eq!(
      u64::from(Adler32.compute(data)),
      weighted_reference(data, 65_521, 1, 16),
      "adler32 len={}",
      data.len()
    );
  });
}

#[test]
fn crcs_match_reference_on_every_kernel() {
  for_each_input(|data| {
    let cksum = cksum_reference(data);
    let crc32 = crc32_reference(data);

    assert_eq!(Cksum.compute(data), cksum, "cksum len={}", data.len());
    assert_eq!(Crc32.compute(data), crc32, "crc32 len={}", data.len());

    for kernel in [CrcKernel::Bitwise, CrcKernel::Table] {
      assert_eq!(Cksum::compute_with(kernel, data), cksum, "cksum/{kernel} len={}", data.len());
      assert_eq!(Crc32::compute_with(kernel, data), crc32, "crc32/{kernel} len={}", data.len());
    }
  });
}

#[test]
fn cksum_length_suffix_spans_multiple_bytes() {
  // 70_000 = 0x011170 needs three suffix bytes; 256 needs two.
  for len in [255usize, 256, 65_535, 65_536, 70_000] {
    let data = gen_bytes(len, 7);
    assert_eq!(Cksum.compute(&data), cksum_reference(&data), "len={len}");
  }
}

#[test]
fn instance_reuse_does_not_leak_state() {
  let a = gen_bytes(100, 1);
  let b = gen_bytes(100, 2);

  let crc = Crc32;
  let first = crc.compute(&a);
  let _ = crc.compute(&b);
  assert_eq!(crc.compute(&a), first);

  let adler = Adler32;
  let first = adler.compute(&a);
  let _ = adler.compute(&b);
  assert_eq!(adler.compute(&a), first);
}
