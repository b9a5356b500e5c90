//! CRC kernel benchmarks: bit-serial reference vs. table lookup.
//!
//! Run: `cargo bench -p checksum --bench crc`
//!
//! The crossover between the two kernels is what
//! `CHECKSUM_CRC_THRESHOLD_BITWISE_TO_TABLE` tunes.

use checksum::{Cksum, Crc32, CrcKernel};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Sizes around the default crossover, plus a few bulk sizes.
const SIZES: [usize; 8] = [8, 16, 32, 64, 128, 256, 4096, 65536];

const KERNELS: [CrcKernel; 2] = [CrcKernel::Bitwise, CrcKernel::Table];

fn bench_crc32(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc/crc32");
  eprintln!("crc32 config: {:?}", Crc32::config());

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    for kernel in KERNELS {
      group.bench_with_input(BenchmarkId::new(kernel.name(), size), &data, |b, data| {
        b.iter(|| core::hint::black_box(Crc32::compute_with(kernel, core::hint::black_box(data))));
      });
    }
  }

  group.finish();
}

fn bench_cksum(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc/cksum");

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    for kernel in KERNELS {
      group.bench_with_input(BenchmarkId::new(kernel.name(), size), &data, |b, data| {
        b.iter(|| core::hint::black_box(Cksum::compute_with(kernel, core::hint::black_box(data))));
      });
    }
  }

  group.finish();
}

criterion_group!(benches, bench_crc32, bench_cksum);
criterion_main!(benches);
