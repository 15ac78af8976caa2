#![no_main]

use libfuzzer_sys::fuzz_target;
use siphash::{Key, SipHash13, SipHash24};
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let key_bytes_len = core::cmp::min(16, input.len());
  let (key_bytes, data) = input.split_at(key_bytes_len);

  let mut raw = [0u8; 16];
  raw[..key_bytes.len()].copy_from_slice(key_bytes);
  let key = Key::from_bytes(raw);
  let [k0, k1] = key.words();

  let ours13 = SipHash13::hash_with_key(key, data);
  let ours24 = SipHash24::hash_with_key(key, data);

  use core::hash::Hasher as _;
  let mut h13 = siphasher::sip::SipHasher13::new_with_keys(k0, k1);
  h13.write(data);
  let exp13 = h13.finish();

  let mut h24 = siphasher::sip::SipHasher24::new_with_key(&raw);
  h24.write(data);
  let exp24 = h24.finish();

  assert_eq!(ours13, exp13);
  assert_eq!(ours24, exp24);
});
