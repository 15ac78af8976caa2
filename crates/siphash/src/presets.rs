//! Fixed-parameter SipHash variants.
//!
//! - [`SipHash13`] / [`SipHash24`]: one-shot, via [`FastHash`].
//! - [`SipHasher13`] / [`SipHasher24`]: streaming, via [`KeyedHash`] and
//!   [`core::hash::Hasher`].

use traits::{FastHash, KeyedHash};

use crate::{Key, SipHasher, State};

/// SipHash-1-3, one-shot.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHash13;

/// SipHash-2-4, one-shot.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHash24;

impl FastHash for SipHash13 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Key = Key;

  #[inline]
  fn hash_with_key(key: Key, data: &[u8]) -> u64 {
    crate::hash_1_3(key, data)
  }
}

impl FastHash for SipHash24 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Key = Key;

  #[inline]
  fn hash_with_key(key: Key, data: &[u8]) -> u64 {
    crate::hash_2_4(key, data)
  }
}

/// Streaming SipHash-`C`-`D`.
///
/// Unlike [`SipHasher`], finalizing does not consume the hasher: the tail is
/// folded into a copy of the state, so [`finalize`](KeyedHash::finalize) may
/// be called at any point and feeding may continue afterwards.
///
/// The derived initial state is retained for [`reset`](KeyedHash::reset); the
/// key itself is not.
///
/// ```
/// use core::hash::Hasher as _;
///
/// use siphash::{Key, SipHasher13, hash_1_3};
/// use traits::KeyedHash as _;
///
/// let key = Key::from_words(1, 2);
/// let mut h = SipHasher13::new_with_key(key);
/// h.write(b"abc");
/// assert_eq!(h.finish(), hash_1_3(key, b"abc"));
/// h.write(b"def");
/// assert_eq!(h.finish(), hash_1_3(key, b"abcdef"));
/// ```
#[derive(Clone)]
pub struct FixedSipHasher<const C: usize, const D: usize> {
  initial: State,
  inner: SipHasher,
}

/// Streaming SipHash-1-3.
pub type SipHasher13 = FixedSipHasher<1, 3>;

/// Streaming SipHash-2-4.
pub type SipHasher24 = FixedSipHasher<2, 4>;

impl<const C: usize, const D: usize> FixedSipHasher<C, D> {
  /// New hasher keyed with `key`.
  #[inline]
  #[must_use]
  pub fn new(key: impl Into<Key>) -> Self {
    let initial = State::from_key(key.into());
    Self {
      initial,
      inner: SipHasher::from_state(initial),
    }
  }

  /// The underlying runtime-parameter hasher.
  #[inline]
  #[must_use]
  pub fn as_inner(&self) -> &SipHasher {
    &self.inner
  }
}

impl<const C: usize, const D: usize> core::fmt::Debug for FixedSipHasher<C, D> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("FixedSipHasher")
      .field("c", &C)
      .field("d", &D)
      .field("pending", &self.inner.pending_len())
      .field("total", &self.inner.total_len())
      .finish_non_exhaustive()
  }
}

impl<const C: usize, const D: usize> Default for FixedSipHasher<C, D> {
  #[inline]
  fn default() -> Self {
    Self::new(Key::default())
  }
}

impl<const C: usize, const D: usize> KeyedHash for FixedSipHasher<C, D> {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Key = Key;

  #[inline]
  fn new_with_key(key: Key) -> Self {
    Self::new(key)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.inner.feed(data, C);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.inner.clone().finalize(C, D)
  }

  #[inline]
  fn reset(&mut self) {
    self.inner = SipHasher::from_state(self.initial);
  }
}

impl<const C: usize, const D: usize> core::hash::Hasher for FixedSipHasher<C, D> {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.inner.feed(bytes, C);
  }

  #[inline]
  fn finish(&self) -> u64 {
    KeyedHash::finalize(self)
  }
}

#[cfg(feature = "std")]
impl<const C: usize, const D: usize> std::io::Write for FixedSipHasher<C, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.inner.feed(buf, C);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
