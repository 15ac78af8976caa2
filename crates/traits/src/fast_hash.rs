//! One-shot keyed hash trait.

use core::fmt::Debug;

/// A keyed hash computed over a fully materialized buffer.
///
/// Implementors are pure functions of `(key, data)`: no state survives the
/// call, so they are safe to invoke from any number of threads at once.
///
/// Streaming counterparts are separate types implementing
/// [`KeyedHash`](crate::KeyedHash), because incremental hashing needs
/// algorithm-specific buffering.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Key type.
  type Key: Copy + Debug + Default;

  /// Compute the hash of `data` under the default (all-zero) key.
  ///
  /// Only useful for fingerprints where the key is not a secret.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_key(Self::Key::default(), data)
  }

  /// Compute the hash of `data` under `key`.
  #[must_use]
  fn hash_with_key(key: Self::Key, data: &[u8]) -> Self::Output;
}
