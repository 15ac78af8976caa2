//! Streaming keyed hash trait.
//!
//! Shaped like the one-shot [`FastHash`](crate::FastHash) trait, plus the
//! streaming surface: incremental updates, idempotent finalize, reset.

use core::fmt::Debug;

/// Keyed hash with an incremental (streaming) interface.
///
/// # Usage
///
/// ```rust,ignore
/// use siphash::{Key, SipHasher24};
/// use traits::KeyedHash;
///
/// let key = Key::from_words(1, 2);
///
/// // One-shot
/// let a = SipHasher24::hash_keyed(key, b"hello world");
///
/// // Streaming
/// let mut h = SipHasher24::new_with_key(key);
/// h.update(b"hello ");
/// h.update(b"world");
/// assert_eq!(h.finalize(), a);
/// ```
///
/// # Implementor Requirements
///
/// - Any split of the input across `update` calls yields the same output as a
///   single `update` over the concatenation.
/// - `finalize()` must be idempotent and must not disturb the running state.
/// - `reset()` restores the state produced by `new_with_key` for the original key.
pub trait KeyedHash: Clone {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The hash output type.
  type Output: Copy + Eq + Debug;

  /// The key type.
  type Key: Copy + Debug;

  /// Create a new hasher keyed with `key`.
  #[must_use]
  fn new_with_key(key: Self::Key) -> Self;

  /// Feed additional data.
  fn update(&mut self, data: &[u8]);

  /// Feed multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Feed `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the hash of everything fed so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset to the freshly keyed state.
  fn reset(&mut self);

  /// Hash `data` under `key` in one shot.
  #[inline]
  #[must_use]
  fn hash_keyed(key: Self::Key, data: &[u8]) -> Self::Output {
    let mut h = Self::new_with_key(key);
    h.update(data);
    h.finalize()
  }

  /// Hash multiple buffers under `key` in one shot.
  #[inline]
  #[must_use]
  fn hash_keyed_vectored(key: Self::Key, bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new_with_key(key);
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader so every byte read is also hashed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(key: Self::Key, inner: R) -> crate::io::KeyedReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::KeyedReader::new(key, inner)
  }

  /// Wrap a writer so every byte written is also hashed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(key: Self::Key, inner: W) -> crate::io::KeyedWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::KeyedWriter::new(key, inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Order-sensitive toy hash; good enough to exercise the provided methods.
  #[derive(Clone, Debug)]
  struct Fold {
    key: u64,
    acc: u64,
  }

  impl KeyedHash for Fold {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;
    type Key = u64;

    fn new_with_key(key: u64) -> Self {
      Self { key, acc: key }
    }

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.acc = self.acc.wrapping_mul(31).wrapping_add(u64::from(b));
      }
    }

    fn finalize(&self) -> u64 {
      self.acc
    }

    fn reset(&mut self) {
      self.acc = self.key;
    }
  }

  #[test]
  fn hash_keyed_matches_streaming() {
    let mut h = Fold::new_with_key(7);
    h.update(b"ab");
    h.update(b"c");
    assert_eq!(h.finalize(), Fold::hash_keyed(7, b"abc"));
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(Fold::hash_keyed_vectored(3, &[b"he", b"", b"llo"]), Fold::hash_keyed(3, b"hello"));
  }

  #[test]
  fn reset_restores_keyed_state() {
    let mut h = Fold::new_with_key(9);
    h.update(b"garbage");
    h.reset();
    h.update(b"x");
    assert_eq!(h.finalize(), Fold::hash_keyed(9, b"x"));
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_slices_match_contiguous() {
    use std::io::IoSlice;

    let mut h = Fold::new_with_key(1);
    h.update_io_slices(&[IoSlice::new(b"ab"), IoSlice::new(b"cd")]);
    assert_eq!(h.finalize(), Fold::hash_keyed(1, b"abcd"));
  }
}
