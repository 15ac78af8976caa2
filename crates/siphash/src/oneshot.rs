//! One-shot hashing over a complete buffer.

use crate::{
  Key, State,
  block::{BLOCK_LEN, tail_block},
};

/// SipHash-`c`-`d` of `data` under `key`.
///
/// Every full block is compressed in order, then the length-tagged tail block
/// (possibly holding no data bytes) is compressed exactly once before
/// finalization.
///
/// ```
/// use siphash::{Key, hash};
///
/// let key = Key::from_bytes(core::array::from_fn(|i| i as u8));
/// assert_eq!(hash(key, b"", 2, 4), 0x726f_db47_dd0e_0e31);
/// ```
#[inline]
#[must_use]
pub fn hash(key: impl Into<Key>, data: &[u8], c: usize, d: usize) -> u64 {
  let mut state = State::from_key(key.into());

  let (blocks, tail) = data.as_chunks::<BLOCK_LEN>();
  for block in blocks {
    state = state.compress(u64::from_le_bytes(*block), c);
  }

  let last = tail_block(tail, data.len() as u64);
  state.compress(last, c).finalize(d)
}

/// SipHash-1-3: one compression round, three finalization rounds.
#[inline]
#[must_use]
pub fn hash_1_3(key: impl Into<Key>, data: &[u8]) -> u64 {
  hash(key, data, 1, 3)
}

/// SipHash-2-4, the parameterization from the original paper.
#[inline]
#[must_use]
pub fn hash_2_4(key: impl Into<Key>, data: &[u8]) -> u64 {
  hash(key, data, 2, 4)
}
