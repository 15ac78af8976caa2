//! I/O adapters for keyed hashes.
//!
//! [`KeyedReader`] and [`KeyedWriter`] pass bytes through to an inner reader or
//! writer and feed exactly the bytes that were actually transferred (short
//! reads and short writes included) into a [`KeyedHash`].
//!
//! # Example
//!
//! ```rust
//! # use traits::KeyedHash;
//! # #[derive(Clone)]
//! # struct Sum { key: u8, acc: u8 }
//! # impl KeyedHash for Sum {
//! #   const OUTPUT_SIZE: usize = 1;
//! #   type Output = u8;
//! #   type Key = u8;
//! #   fn new_with_key(key: u8) -> Self { Self { key, acc: key } }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.acc = data.iter().fold(self.acc, |acc, &b| acc.wrapping_add(b));
//! #   }
//! #   fn finalize(&self) -> u8 { self.acc }
//! #   fn reset(&mut self) { self.acc = self.key; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(1, Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.hash(), 1u8.wrapping_add(b'a').wrapping_add(b'b').wrapping_add(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::KeyedHash;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(read) = buf.get(..n) {
    on_data(read);
  }
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(written) = buf.get(..n) {
    on_data(written);
  }
  Ok(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`](std::io::Read) and hashes every byte read through it.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The keyed hash type (e.g., `SipHasher24`)
#[derive(Clone)]
pub struct KeyedReader<R, H: KeyedHash> {
  inner: R,
  hasher: H,
}

impl<R, H: KeyedHash> KeyedReader<R, H> {
  /// Create a new reader wrapper keyed with `key`.
  #[inline]
  #[must_use]
  pub fn new(key: H::Key, inner: R) -> Self {
    Self {
      inner,
      hasher: H::new_with_key(key),
    }
  }

  /// Hash of all bytes read so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap, returning the inner reader and the final hash.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    let out = self.hasher.finalize();
    (self.inner, out)
  }

  /// Unwrap, discarding the hash.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }
}

impl<R: std::io::Read, H: KeyedHash> std::io::Read for KeyedReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`](std::io::Write) and hashes every byte written through it.
///
/// # Example
///
/// ```rust
/// # use traits::KeyedHash;
/// # #[derive(Clone)]
/// # struct Sum { key: u8, acc: u8 }
/// # impl KeyedHash for Sum {
/// #   const OUTPUT_SIZE: usize = 1;
/// #   type Output = u8;
/// #   type Key = u8;
/// #   fn new_with_key(key: u8) -> Self { Self { key, acc: key } }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.acc = data.iter().fold(self.acc, |acc, &b| acc.wrapping_add(b));
/// #   }
/// #   fn finalize(&self) -> u8 { self.acc }
/// #   fn reset(&mut self) { self.acc = self.key; }
/// # }
/// # use std::io::Write;
/// let mut writer = Sum::writer(0, Vec::new());
/// writer.write_all(b"hi")?;
/// let (out, hash) = writer.into_parts();
/// assert_eq!(out, b"hi".to_vec());
/// assert_eq!(hash, b'h'.wrapping_add(b'i'));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct KeyedWriter<W, H: KeyedHash> {
  inner: W,
  hasher: H,
}

impl<W, H: KeyedHash> KeyedWriter<W, H> {
  /// Create a new writer wrapper keyed with `key`.
  #[inline]
  #[must_use]
  pub fn new(key: H::Key, inner: W) -> Self {
    Self {
      inner,
      hasher: H::new_with_key(key),
    }
  }

  /// Hash of all bytes written so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap, returning the inner writer and the final hash.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    let out = self.hasher.finalize();
    (self.inner, out)
  }

  /// Unwrap, discarding the hash.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: std::io::Write, H: KeyedHash> std::io::Write for KeyedWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::{
    io::{Read, Write},
    vec::Vec,
  };

  use super::*;

  #[derive(Clone)]
  struct Concat {
    key: u8,
    seen: Vec<u8>,
  }

  impl KeyedHash for Concat {
    const OUTPUT_SIZE: usize = 8;
    type Output = (u8, usize);
    type Key = u8;

    fn new_with_key(key: u8) -> Self {
      Self { key, seen: Vec::new() }
    }

    fn update(&mut self, data: &[u8]) {
      self.seen.extend_from_slice(data);
    }

    fn finalize(&self) -> (u8, usize) {
      (self.key, self.seen.len())
    }

    fn reset(&mut self) {
      self.seen.clear();
    }
  }

  /// Writer that accepts at most `limit` bytes per call.
  struct Short {
    limit: usize,
    out: Vec<u8>,
  }

  impl Write for Short {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn short_writes_hash_only_written_bytes() {
    let mut w = KeyedWriter::<_, Concat>::new(5, Short { limit: 3, out: Vec::new() });
    let n = w.write(b"abcdefgh").unwrap();
    assert_eq!(n, 3);
    assert_eq!(w.hash(), (5, 3));

    w.write_all(b"defgh").unwrap();
    let (inner, hash) = w.into_parts();
    assert_eq!(inner.out, b"abcdefgh");
    assert_eq!(hash, (5, 8));
  }

  #[test]
  fn reader_hashes_bytes_read() {
    let mut r = KeyedReader::<_, Concat>::new(2, std::io::Cursor::new(b"hello".to_vec()));
    let mut buf = [0u8; 2];
    assert_eq!(r.read(&mut buf).unwrap(), 2);
    assert_eq!(r.hash(), (2, 2));

    let mut rest = Vec::new();
    r.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"llo");
    assert_eq!(r.hash(), (2, 5));
  }

  #[test]
  fn hasher_mut_reset() {
    let mut w = KeyedWriter::<_, Concat>::new(0, Vec::new());
    w.write_all(b"abc").unwrap();
    w.hasher_mut().reset();
    assert_eq!(w.hash(), (0, 0));
    assert_eq!(w.inner(), b"abc");
  }
}
