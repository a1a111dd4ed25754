#![forbid(unsafe_code)]

//! Bounds-checked readers for pulling values out of a byte buffer.
//!
//! Every reader checks the range before touching the buffer and reports a
//! [`ReadError`] instead of panicking.

use alloc::{borrow::Cow, string::String};

use crate::ReadError;

/// Gets `len` bytes starting at `offset`.
#[inline]
pub fn read_bytes(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], ReadError> {
  let end = offset.checked_add(len).filter(|end| *end <= buf.len());
  match end {
    Some(end) => Ok(&buf[offset..end]),
    None => Err(ReadError::OutOfBounds { offset, size: len, len: buf.len() }),
  }
}

/// Splits off an `N` byte array at `offset`.
#[inline]
pub fn read_byte_array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], ReadError> {
  let bytes = read_bytes(buf, offset, N)?;
  let mut a = [0_u8; N];
  a.copy_from_slice(bytes);
  Ok(a)
}

/// Reads one byte.
#[inline]
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, ReadError> {
  buf.get(offset).copied().ok_or(ReadError::OutOfBounds { offset, size: 1, len: buf.len() })
}

/// Reads a big-endian `u16`.
#[inline]
pub fn read_u16_be(buf: &[u8], offset: usize) -> Result<u16, ReadError> {
  read_byte_array(buf, offset).map(u16::from_be_bytes)
}

/// Reads a big-endian `u32`.
#[inline]
pub fn read_u32_be(buf: &[u8], offset: usize) -> Result<u32, ReadError> {
  read_byte_array(buf, offset).map(u32::from_be_bytes)
}

/// Decodes Latin-1 (ISO 8859-1) text, which also covers 7-bit ASCII.
///
/// Each byte maps directly to the code point of the same value. When every
/// byte is ASCII the text is borrowed from the buffer.
pub fn read_latin1(buf: &[u8], offset: usize, len: usize) -> Result<Cow<'_, str>, ReadError> {
  read_bytes(buf, offset, len).map(latin1_to_str)
}

/// Decodes UTF-8 text, failing on any malformed sequence.
pub fn read_utf8(buf: &[u8], offset: usize, len: usize) -> Result<&str, ReadError> {
  let bytes = read_bytes(buf, offset, len)?;
  core::str::from_utf8(bytes)
    .map_err(|e| ReadError::InvalidEncoding { offset, valid_up_to: e.valid_up_to() })
}

/// Reads a field that ends with a null byte.
///
/// Returns the field (without the null) and the offset just past the null.
pub fn read_null_terminated(buf: &[u8], offset: usize) -> Result<(&[u8], usize), ReadError> {
  let rest = buf.get(offset..).ok_or(ReadError::OutOfBounds { offset, size: 1, len: buf.len() })?;
  match rest.iter().position(|&b| b == 0) {
    Some(nul) => Ok((&rest[..nul], offset + nul + 1)),
    None => Err(ReadError::MissingNul { offset }),
  }
}

/// Converts Latin-1 bytes to text, borrowing if they're all ASCII.
pub fn latin1_to_str(bytes: &[u8]) -> Cow<'_, str> {
  match core::str::from_utf8(bytes) {
    Ok(s) if bytes.is_ascii() => Cow::Borrowed(s),
    _ => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect::<String>()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_int_readers() {
    let buf = [0x00, 0x01, 0x02, 0x03, 0x04];
    assert_eq!(read_u8(&buf, 4), Ok(4));
    assert_eq!(read_u16_be(&buf, 1), Ok(0x0102));
    assert_eq!(read_u32_be(&buf, 1), Ok(0x0102_0304));
    assert_eq!(read_u32_be(&buf, 2), Err(ReadError::OutOfBounds { offset: 2, size: 4, len: 5 }));
    assert_eq!(read_u8(&buf, 5), Err(ReadError::OutOfBounds { offset: 5, size: 1, len: 5 }));
    assert!(read_bytes(&buf, usize::MAX, 2).is_err());
    assert_eq!(read_bytes(&buf, 5, 0), Ok(&[][..]));
  }

  #[test]
  fn test_text_readers() {
    assert!(matches!(read_latin1(b"abc", 0, 3), Ok(Cow::Borrowed("abc"))));
    assert_eq!(read_latin1(&[0x63, 0x61, 0x66, 0xE9], 0, 4).unwrap(), "caf\u{e9}");
    assert_eq!(read_utf8("h\u{e9}llo".as_bytes(), 0, 6), Ok("h\u{e9}llo"));
    assert_eq!(
      read_utf8(&[b'a', 0xC3, 0x28], 0, 3),
      Err(ReadError::InvalidEncoding { offset: 0, valid_up_to: 1 })
    );
  }

  #[test]
  fn test_null_terminated() {
    let buf = b"key\0value";
    assert_eq!(read_null_terminated(buf, 0), Ok((&b"key"[..], 4)));
    assert_eq!(read_null_terminated(buf, 4), Err(ReadError::MissingNul { offset: 4 }));
    assert!(read_null_terminated(buf, 10).is_err());
    // an offset exactly at the end has no room for a null
    assert_eq!(read_null_terminated(buf, 9), Err(ReadError::MissingNul { offset: 9 }));
  }
}
