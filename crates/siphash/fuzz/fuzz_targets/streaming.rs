//! Arbitrary sequences of feed calls must match the one-shot hash.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siphash::{SipHasher, hash};

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u64; 2],
  data: Vec<u8>,
  /// Chunk sizes for successive feeds; zero-length feeds are allowed.
  chunk_sizes: Vec<u8>,
  /// Selects SipHash-1-3 when false, SipHash-2-4 when true.
  two_four: bool,
}

fuzz_target!(|input: Input| {
  let (c, d) = if input.two_four { (2, 4) } else { (1, 3) };
  let data = &input.data;
  let expected = hash(input.key, data, c, d);

  let mut hasher = SipHasher::new(input.key);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] as usize
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.feed(&data[offset..end], c);
    offset = end;
    chunk_idx += 1;

    // All-zero chunk lists would never advance.
    if chunk_idx > data.len() * 2 + input.chunk_sizes.len() {
      hasher.feed(&data[offset..], c);
      offset = data.len();
    }
  }

  assert_eq!(hasher.finalize(c, d), expected, "siphash-{c}-{d} streaming mismatch");
});
