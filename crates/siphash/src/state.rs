//! The SipHash permutation state and its three transitions.
//!
//! Every transition takes the state by value and returns the successor, so a
//! hash is a straight fold over the message blocks:
//!
//! ```
//! use siphash::{Key, State};
//!
//! // Empty input: a single tail block holding only the length tag (0).
//! let out = State::from_key(Key::default()).compress(0, 2).finalize(4);
//! assert_eq!(out, siphash::hash_2_4(Key::default(), b""));
//! ```

use crate::Key;

// The hex reads as the ASCII text left to right, so the first character sits
// in the most significant byte. Loaded little-endian, the same word is the
// text reversed: `C0 == u64::from_le_bytes(*b"uespemos")`.

/// `"somepseu"` spelled big-endian.
pub const C0: u64 = 0x736f_6d65_7073_6575;
/// `"dorandom"` spelled big-endian.
pub const C1: u64 = 0x646f_7261_6e64_6f6d;
/// `"lygenera"` spelled big-endian.
pub const C2: u64 = 0x6c79_6765_6e65_7261;
/// `"tedbytes"` spelled big-endian.
pub const C3: u64 = 0x7465_6462_7974_6573;

/// Four-word SipHash state.
///
/// `Debug` is intentionally not derived: the words are a function of the key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct State {
  v0: u64,
  v1: u64,
  v2: u64,
  v3: u64,
}

impl State {
  /// Initial state for the key halves `k0`, `k1`.
  #[inline]
  #[must_use]
  pub const fn new(k0: u64, k1: u64) -> Self {
    Self {
      v0: k0 ^ C0,
      v1: k1 ^ C1,
      v2: k0 ^ C2,
      v3: k1 ^ C3,
    }
  }

  /// Initial state for `key`.
  #[inline]
  #[must_use]
  pub const fn from_key(key: Key) -> Self {
    let [k0, k1] = key.words();
    Self::new(k0, k1)
  }

  /// Build a state from raw words.
  #[inline]
  #[must_use]
  pub const fn from_words(words: [u64; 4]) -> Self {
    let [v0, v1, v2, v3] = words;
    Self { v0, v1, v2, v3 }
  }

  /// The raw words `[v0, v1, v2, v3]`.
  #[inline]
  #[must_use]
  pub const fn words(self) -> [u64; 4] {
    [self.v0, self.v1, self.v2, self.v3]
  }

  /// One SipRound.
  #[inline(always)]
  #[must_use]
  pub const fn round(self) -> Self {
    let Self {
      mut v0,
      mut v1,
      mut v2,
      mut v3,
    } = self;

    v0 = v0.wrapping_add(v1);
    v2 = v2.wrapping_add(v3);
    v1 = v1.rotate_left(13);
    v3 = v3.rotate_left(16);
    v1 ^= v0;
    v3 ^= v2;
    v0 = v0.rotate_left(32);

    v2 = v2.wrapping_add(v1);
    v0 = v0.wrapping_add(v3);
    v1 = v1.rotate_left(17);
    v3 = v3.rotate_left(21);
    v1 ^= v2;
    v3 ^= v0;
    v2 = v2.rotate_left(32);

    Self { v0, v1, v2, v3 }
  }

  #[inline(always)]
  #[must_use]
  const fn rounds(self, n: usize) -> Self {
    let mut s = self;
    let mut i = 0;
    while i < n {
      s = s.round();
      i += 1;
    }
    s
  }

  /// Absorb one message block with `c` rounds.
  ///
  /// `m` goes into `v3` before the rounds and into `v0` after them.
  #[inline(always)]
  #[must_use]
  pub const fn compress(self, m: u64, c: usize) -> Self {
    let mut s = self;
    s.v3 ^= m;
    s = s.rounds(c);
    s.v0 ^= m;
    s
  }

  /// Run `d` finalization rounds and fold the state to 64 bits.
  #[inline(always)]
  #[must_use]
  pub const fn finalize(self, d: usize) -> u64 {
    let mut s = self;
    s.v2 ^= 0xff;
    s = s.rounds(d);
    s.v0 ^ s.v1 ^ s.v2 ^ s.v3
  }
}
