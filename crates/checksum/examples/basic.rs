//! Basic checksum usage: typed algorithms, run-time selection, verification.
//!
//! Run with: `cargo run --example basic -p checksum`
//!
//! Override the CRC kernel choice with `CHECKSUM_CRC_FORCE=bitwise` or
//! `CHECKSUM_CRC_THRESHOLD_BITWISE_TO_TABLE=<bytes>`.

use checksum::{
  Adler32, Algorithm, BsdSum, Checksum, ChecksumExt, Cksum, Crc, Crc32, Fletcher16, Sum8, Sysv, Xor8, hex,
};

fn main() {
  println!("=== Checksum Basic Examples ===\n");

  typed_examples();
  dynamic_examples();
  verification_example();
  introspection_example();
}

/// Each algorithm is a zero-sized value with its own output width.
fn typed_examples() {
  println!("--- Typed Algorithms ---\n");

  let data = b"123456789";

  let sum8: u8 = Sum8.compute(data);
  println!("sum8:       0x{sum8:02x}");
  assert_eq!(sum8, 0xDD);

  let xor8: u8 = Xor8.compute(data);
  println!("xor8:       0x{xor8:02x}");
  assert_eq!(xor8, 0x31);

  let bsd: u16 = BsdSum.compute(data);
  println!("bsd:        0x{bsd:04x}");
  assert_eq!(bsd, 0xD16F);

  let fletcher16: u16 = Fletcher16.compute(data);
  println!("fletcher16: 0x{fletcher16:04x}");
  assert_eq!(fletcher16, 0x1EDE);

  let adler: u32 = Adler32.compute(data);
  println!("adler32:    0x{adler:08x}");
  assert_eq!(adler, 0x091E_01DE);

  let crc32 = Crc32.compute(data);
  println!("crc32:      0x{crc32:08x} (generator 0x{:08x})", Crc32.generator_polynomial());
  assert_eq!(crc32, 0xCBF4_3926);

  let cksum = Cksum.compute(data);
  println!("cksum:      0x{cksum:08x} (generator 0x{:08x})", Cksum.generator_polynomial());
  assert_eq!(cksum, 0x377A_6011);

  println!();
}

/// Algorithms selected by name, e.g. from a command line.
fn dynamic_examples() {
  println!("--- Run-Time Selection ---\n");

  for name in ["sum16", "SYSV", "fletcher-32", "crc32"] {
    match name.parse::<Algorithm>() {
      Ok(algo) => println!("{name:>12} -> {algo:<10} {}", algo.hex_str("abcdef")),
      Err(err) => println!("{name:>12} -> {err}"),
    }
  }

  match "md5".parse::<Algorithm>() {
    Ok(algo) => println!("{:>12} -> {algo}", "md5"),
    Err(err) => println!("{:>12} -> {err}", "md5"),
  }

  let all: Vec<u32> = Algorithm::ALL.iter().map(|algo| algo.compute_str("abcdef")).collect();
  println!("\nall (padded): {}", hex::to_hex_padded(&all));
  println!();
}

fn verification_example() {
  println!("--- Verification ---\n");

  let payload = b"hello world";
  let expected = Crc32.compute(payload);

  match Crc32.verify(payload, expected) {
    Ok(()) => println!("intact payload:    ok"),
    Err(err) => println!("intact payload:    {err}"),
  }

  match Crc32.verify(b"hello worle", expected) {
    Ok(()) => println!("corrupted payload: ok"),
    Err(err) => println!("corrupted payload: {err}"),
  }

  println!("sysv of payload:   {}", Sysv.hex(payload));
  println!();
}

/// Which CRC kernel runs for a given length.
fn introspection_example() {
  println!("--- CRC Kernel Selection ---\n");

  println!("config: {:?}", Crc32::config());
  for len in [0, 16, 63, 64, 4096] {
    println!("{len:>6} bytes -> {}", Crc32::kernel_name_for_len(len));
  }
}
