use core::fmt;

use traits::InvalidKeyLength;

use crate::block::load_le;

/// Key length in bytes.
pub const KEY_LEN: usize = 16;

/// A 128-bit SipHash key.
///
/// The byte form and the word form are interchangeable: bytes `0..8` are `k0`
/// and bytes `8..16` are `k1`, each read little-endian.
///
/// ```
/// use siphash::Key;
///
/// let bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
/// assert_eq!(Key::from_bytes(bytes), Key::from_words(0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Key {
  k0: u64,
  k1: u64,
}

impl Key {
  /// Key from its two 64-bit halves.
  #[inline]
  #[must_use]
  pub const fn from_words(k0: u64, k1: u64) -> Self {
    Self { k0, k1 }
  }

  /// Key from 16 raw bytes.
  #[inline]
  #[must_use]
  pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
    let [b0, b1, b2, b3, b4, b5, b6, b7, b8, b9, b10, b11, b12, b13, b14, b15] = bytes;
    Self {
      k0: u64::from_le_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
      k1: u64::from_le_bytes([b8, b9, b10, b11, b12, b13, b14, b15]),
    }
  }

  /// Key from a runtime-length slice, which must be exactly 16 bytes.
  #[inline]
  pub fn from_slice(bytes: &[u8]) -> Result<Self, InvalidKeyLength> {
    if bytes.len() != KEY_LEN {
      return Err(InvalidKeyLength::new(KEY_LEN, bytes.len()));
    }
    let (lo, hi) = bytes.split_at(8);
    Ok(Self {
      k0: load_le(lo),
      k1: load_le(hi),
    })
  }

  /// The halves `[k0, k1]`.
  #[inline]
  #[must_use]
  pub const fn words(self) -> [u64; 2] {
    [self.k0, self.k1]
  }

  /// The 16-byte form.
  #[inline]
  #[must_use]
  pub fn to_bytes(self) -> [u8; KEY_LEN] {
    let mut out = [0u8; KEY_LEN];
    let (lo, hi) = out.split_at_mut(8);
    lo.copy_from_slice(&self.k0.to_le_bytes());
    hi.copy_from_slice(&self.k1.to_le_bytes());
    out
  }
}

// Key material stays out of logs and panic messages.
impl fmt::Debug for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Key(..)")
  }
}

impl From<[u8; KEY_LEN]> for Key {
  #[inline]
  fn from(bytes: [u8; KEY_LEN]) -> Self {
    Self::from_bytes(bytes)
  }
}

impl From<&[u8; KEY_LEN]> for Key {
  #[inline]
  fn from(bytes: &[u8; KEY_LEN]) -> Self {
    Self::from_bytes(*bytes)
  }
}

impl From<[u64; 2]> for Key {
  #[inline]
  fn from([k0, k1]: [u64; 2]) -> Self {
    Self::from_words(k0, k1)
  }
}

impl From<(u64, u64)> for Key {
  #[inline]
  fn from((k0, k1): (u64, u64)) -> Self {
    Self::from_words(k0, k1)
  }
}

impl TryFrom<&[u8]> for Key {
  type Error = InvalidKeyLength;

  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    Self::from_slice(bytes)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;

  fn counting() -> [u8; 16] {
    core::array::from_fn(|i| i as u8)
  }

  #[test]
  fn bytes_decompose_little_endian() {
    let key = Key::from_bytes(counting());
    assert_eq!(key.words(), [0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908]);
  }

  #[test]
  fn bytes_round_trip() {
    let bytes = counting();
    assert_eq!(Key::from_bytes(bytes).to_bytes(), bytes);
  }

  #[test]
  fn all_forms_agree() {
    let a = Key::from(counting());
    let b = Key::from(&counting());
    let c = Key::from([0x0706_0504_0302_0100u64, 0x0f0e_0d0c_0b0a_0908]);
    let d = Key::from((0x0706_0504_0302_0100u64, 0x0f0e_0d0c_0b0a_0908u64));
    let e = Key::try_from(&counting()[..]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a, d);
    assert_eq!(a, e);
  }

  #[test]
  fn slice_length_is_checked() {
    for len in [0usize, 1, 8, 15, 17, 32] {
      let buf = [0u8; 32];
      let err = Key::from_slice(&buf[..len]).unwrap_err();
      assert_eq!(err, InvalidKeyLength::new(16, len));
    }
  }

  #[test]
  fn default_is_zero() {
    assert_eq!(Key::default().words(), [0, 0]);
  }

  #[test]
  fn debug_hides_material() {
    let key = Key::from_words(0xdead_beef, 0xcafe);
    let dbg = format!("{key:?}");
    assert_eq!(dbg, "Key(..)");
  }
}
