//! Error types for keyed hashing.
//!
//! Hashing itself is infallible. Errors only arise at the API edge, when a
//! caller hands over key material whose size is only known at runtime.

use core::fmt;

/// A key slice had the wrong length.
///
/// Returned when converting a runtime-length byte slice into a fixed-size key.
/// Carries both lengths so callers can report the mismatch; never carries key
/// bytes.
///
/// # Examples
///
/// ```
/// use traits::InvalidKeyLength;
///
/// fn parse(bytes: &[u8]) -> Result<[u8; 16], InvalidKeyLength> {
///   <[u8; 16]>::try_from(bytes).map_err(|_| InvalidKeyLength::new(16, bytes.len()))
/// }
///
/// let err = parse(&[0u8; 7]).unwrap_err();
/// assert_eq!(err.actual(), 7);
/// assert_eq!(err.to_string(), "invalid key length: expected 16 bytes, got 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidKeyLength {
  expected: usize,
  actual: usize,
}

impl InvalidKeyLength {
  /// Create a new key length error.
  #[inline]
  #[must_use]
  pub const fn new(expected: usize, actual: usize) -> Self {
    Self { expected, actual }
  }

  /// Required key length in bytes.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> usize {
    self.expected
  }

  /// Length of the slice that was supplied.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> usize {
    self.actual
  }
}

impl fmt::Display for InvalidKeyLength {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "invalid key length: expected {} bytes, got {}", self.expected, self.actual)
  }
}

impl core::error::Error for InvalidKeyLength {}
