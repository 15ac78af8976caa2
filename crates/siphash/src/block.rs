//! Little-endian block packing.

#![allow(clippy::indexing_slicing)] // Slice lengths are clamped to BLOCK_LEN first

/// Bytes per message block.
pub const BLOCK_LEN: usize = 8;

/// Pack up to eight bytes into a word, little-endian, zero-filling the high
/// positions. Bytes past the eighth are ignored.
#[inline(always)]
#[must_use]
pub fn load_le(bytes: &[u8]) -> u64 {
  let n = bytes.len().min(BLOCK_LEN);
  let mut buf = [0u8; BLOCK_LEN];
  buf[..n].copy_from_slice(&bytes[..n]);
  u64::from_le_bytes(buf)
}

/// The final block of a message: the `len % 8` trailing bytes packed
/// little-endian, with `total_len mod 256` in the top byte.
///
/// The tag keeps only the low eight bits of the length, so messages whose
/// lengths differ by a multiple of 256 carry the same tag byte. That is part
/// of SipHash itself; the tail bytes and every preceding block still differ.
///
/// ```
/// use siphash::tail_block;
///
/// assert_eq!(tail_block(&[], 0), 0);
/// assert_eq!(tail_block(&[0xaa, 0xbb], 10), 0x0a00_0000_0000_bbaa);
/// assert_eq!(tail_block(&[], 256), tail_block(&[], 0));
/// ```
#[inline(always)]
#[must_use]
pub fn tail_block(tail: &[u8], total_len: u64) -> u64 {
  debug_assert!(tail.len() < BLOCK_LEN, "tail must be shorter than a block");
  load_le(tail) | ((total_len & 0xff) << 56)
}
