//! Optional diagnostics for incremental hashers.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! debugging chunking behaviour without affecting normal builds. Nothing here
//! exposes state words or key material.

use crate::{SipHasher, block::BLOCK_LEN};

/// Buffering snapshot of a [`SipHasher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HasherDiag {
  /// Bytes waiting in the carry buffer.
  pub pending: usize,
  /// Total bytes fed so far.
  pub total_len: u64,
  /// Full blocks compressed so far.
  pub blocks_compressed: u64,
  /// Top byte the tail block would carry if finalized now.
  pub length_tag: u8,
}

/// Snapshot the buffering state of `hasher`.
#[inline]
#[must_use]
pub fn inspect(hasher: &SipHasher) -> HasherDiag {
  let total_len = hasher.total_len();
  let pending = hasher.pending_len();
  HasherDiag {
    pending,
    total_len,
    blocks_compressed: total_len.wrapping_sub(pending as u64) / BLOCK_LEN as u64,
    length_tag: (total_len & 0xff) as u8,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_hasher() {
    let d = inspect(&SipHasher::default());
    assert_eq!(
      d,
      HasherDiag {
        pending: 0,
        total_len: 0,
        blocks_compressed: 0,
        length_tag: 0,
      }
    );
  }

  #[test]
  fn after_feeding() {
    let mut h = SipHasher::default();
    h.feed_2(&[0u8; 5]);
    h.feed_2(&[0u8; 300]);
    let d = inspect(&h);
    assert_eq!(d.total_len, 305);
    assert_eq!(d.pending, 1);
    assert_eq!(d.blocks_compressed, 38);
    assert_eq!(d.length_tag, 49);
  }
}
