//! Fuzz target for run-time algorithm selection.
//!
//! Name parsing must never panic, and every parsed algorithm must agree
//! across its byte, string and hex entry points.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Algorithm, hex};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  name: String,
  text: String,
  index: u8,
}

fuzz_target!(|input: Input| {
  if let Ok(algo) = input.name.parse::<Algorithm>() {
    assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
  }

  let algo = Algorithm::ALL[usize::from(input.index) % Algorithm::ALL.len()];
  let value = algo.compute_str(&input.text);
  assert_eq!(value, algo.compute(input.text.as_bytes()));
  assert_eq!(algo.hex_str(&input.text), hex::to_hex(value));
  assert!(algo.verify(input.text.as_bytes(), value).is_ok());
  assert!(u64::from(value) < 1u64 << (algo.output_size() * 8));
});
