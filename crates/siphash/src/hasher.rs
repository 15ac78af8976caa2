//! Incremental hashing with runtime round counts.
//!
//! [`SipHasher`] accepts input in chunks of any size and yields exactly what
//! [`hash`](crate::hash) would over the concatenation of those chunks. Bytes
//! that do not yet make up a full block wait in a seven-byte carry buffer;
//! the running byte count feeds the length tag at finalization.

#![allow(clippy::indexing_slicing)] // Carry indices are bounded by `pending < BLOCK_LEN`

use core::fmt;

use crate::{
  Key, State,
  block::{BLOCK_LEN, tail_block},
};

const CARRY_LEN: usize = BLOCK_LEN - 1;

/// Streaming SipHash with the round counts chosen per call.
///
/// The same `c` must be passed to every [`feed`](Self::feed) and to
/// [`finalize`](Self::finalize) for the result to be SipHash-`c`-`d`; the
/// `feed_*`/`finalize_*` presets pair them up. For round counts fixed at the
/// type level, see [`SipHasher13`](crate::SipHasher13) and
/// [`SipHasher24`](crate::SipHasher24).
///
/// ```
/// use siphash::{Key, SipHasher, hash_2_4};
///
/// let key = Key::from_words(0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);
/// let mut h = SipHasher::new(key);
/// h.feed_2(b"hel");
/// h.feed_2(b"");
/// h.feed_2(b"lo, world");
/// assert_eq!(h.finalize_2_4(), hash_2_4(key, b"hello, world"));
/// ```
#[derive(Clone)]
pub struct SipHasher {
  state: State,
  carry: [u8; CARRY_LEN],
  pending: usize,
  total: u64,
}

impl SipHasher {
  /// New hasher keyed with `key`.
  #[inline]
  #[must_use]
  pub fn new(key: impl Into<Key>) -> Self {
    Self::from_state(State::from_key(key.into()))
  }

  /// New hasher keyed with the halves `k0`, `k1`.
  #[inline]
  #[must_use]
  pub const fn from_words(k0: u64, k1: u64) -> Self {
    Self::from_state(State::new(k0, k1))
  }

  /// New hasher keyed with 16 raw bytes.
  #[inline]
  #[must_use]
  pub const fn from_bytes(bytes: [u8; 16]) -> Self {
    Self::from_state(State::from_key(Key::from_bytes(bytes)))
  }

  #[inline]
  pub(crate) const fn from_state(state: State) -> Self {
    Self {
      state,
      carry: [0; CARRY_LEN],
      pending: 0,
      total: 0,
    }
  }

  /// Append `data` to the message, compressing with `c` rounds per block.
  ///
  /// Nothing is compressed until a full block is available. Zero-length
  /// input is accepted and changes nothing.
  pub fn feed(&mut self, data: &[u8], c: usize) {
    debug_assert!(self.pending < BLOCK_LEN, "carry overflow: {} pending bytes", self.pending);

    let pending = self.pending;
    self.total = self.total.wrapping_add(data.len() as u64);

    if pending + data.len() < BLOCK_LEN {
      self.carry[pending..pending + data.len()].copy_from_slice(data);
      self.pending += data.len();
      return;
    }

    // Top up the carried bytes to one full block.
    let (head, rest) = data.split_at(BLOCK_LEN - pending);
    let mut first = [0u8; BLOCK_LEN];
    first[..pending].copy_from_slice(&self.carry[..pending]);
    first[pending..].copy_from_slice(head);
    let mut state = self.state.compress(u64::from_le_bytes(first), c);

    let (blocks, tail) = rest.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      state = state.compress(u64::from_le_bytes(*block), c);
    }
    self.state = state;

    self.carry = [0; CARRY_LEN];
    self.carry[..tail.len()].copy_from_slice(tail);
    self.pending = tail.len();
  }

  /// [`feed`](Self::feed) with one round per block.
  #[inline]
  pub fn feed_1(&mut self, data: &[u8]) {
    self.feed(data, 1);
  }

  /// [`feed`](Self::feed) with two rounds per block.
  #[inline]
  pub fn feed_2(&mut self, data: &[u8]) {
    self.feed(data, 2);
  }

  /// Compress the length-tagged tail block and run `d` finalization rounds.
  ///
  /// Consumes the hasher; clone it first to keep hashing past this point.
  #[inline]
  #[must_use]
  pub fn finalize(self, c: usize, d: usize) -> u64 {
    debug_assert!(self.pending < BLOCK_LEN, "carry overflow: {} pending bytes", self.pending);
    let last = tail_block(&self.carry[..self.pending], self.total);
    self.state.compress(last, c).finalize(d)
  }

  /// SipHash-1-3 of everything fed so far.
  #[inline]
  #[must_use]
  pub fn finalize_1_3(self) -> u64 {
    self.finalize(1, 3)
  }

  /// SipHash-2-4 of everything fed so far.
  #[inline]
  #[must_use]
  pub fn finalize_2_4(self) -> u64 {
    self.finalize(2, 4)
  }

  /// Bytes waiting in the carry buffer (always `< 8`).
  #[inline]
  #[must_use]
  pub const fn pending_len(&self) -> usize {
    self.pending
  }

  /// Total bytes fed, wrapping at `2^64`.
  #[inline]
  #[must_use]
  pub const fn total_len(&self) -> u64 {
    self.total
  }

  /// State after the last full block.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> State {
    self.state
  }
}

impl Default for SipHasher {
  /// Hasher keyed with the all-zero key.
  #[inline]
  fn default() -> Self {
    Self::new(Key::default())
  }
}

impl fmt::Debug for SipHasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SipHasher")
      .field("pending", &self.pending)
      .field("total", &self.total)
      .finish_non_exhaustive()
  }
}
