use super::*;

/// Checks a keyword (also used for profile and palette names).
///
/// Keywords are 1-79 bytes of printable Latin-1: `32..=126` or `161..=255`.
pub(crate) fn check_keyword(keyword: &[u8]) -> Result<&[u8], PayloadError> {
  if keyword.is_empty() {
    Err(PayloadError::BadKeyword("empty"))
  } else if keyword.len() > 79 {
    Err(PayloadError::BadKeyword("longer than 79 bytes"))
  } else if !keyword.iter().all(|&b| matches!(b, 32..=126 | 161..=255)) {
    Err(PayloadError::BadKeyword("contains non-printable bytes"))
  } else {
    Ok(keyword)
  }
}

/// Reads the null-terminated keyword at the start of a payload.
///
/// Gives the keyword and the offset just after its null.
pub(crate) fn split_keyword(data: &[u8]) -> Result<(&[u8], usize), PayloadError> {
  let (keyword, next) = read_null_terminated(data, 0).map_err(|e| match e {
    ReadError::MissingNul { .. } if data.len() > 79 => PayloadError::BadKeyword("longer than 79 bytes"),
    other => PayloadError::Read(other),
  })?;
  Ok((check_keyword(keyword)?, next))
}

/// `tEXt`: Textual data
///
/// Spec: [tEXt](https://www.w3.org/TR/png/#11tEXt)
///
/// A keyword, a null, and then the text. Both are Latin-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct tEXt<'b> {
  /// Latin-1 keyword, 1-79 bytes.
  pub keyword: &'b [u8],
  /// Latin-1 text, may be empty.
  pub text: &'b [u8],
}
impl<'b> TryFrom<&'b [u8]> for tEXt<'b> {
  type Error = PayloadError;
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (keyword, next) = split_keyword(data)?;
    let text = &data[next..];
    if text.contains(&0) {
      return Err(PayloadError::BadField { field: "text (embedded null)", value: 0 });
    }
    Ok(Self { keyword, text })
  }
}
impl<'b> tEXt<'b> {
  /// The keyword as a string.
  #[inline]
  #[must_use]
  pub fn keyword(&self) -> Cow<'b, str> {
    latin1_to_str(self.keyword)
  }
  /// The text as a string, decoded from Latin-1 without any other changes.
  #[inline]
  #[must_use]
  pub fn text(&self) -> Cow<'b, str> {
    latin1_to_str(self.text)
  }
}
impl core::fmt::Display for tEXt<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Keyword: {}, {} bytes of text", self.keyword(), self.text.len())
  }
}

/// `zTXt`: Compressed textual data
///
/// Spec: [zTXt](https://www.w3.org/TR/png/#11zTXt)
///
/// A keyword, a null, a compression method byte (always 0, zlib), and then a
/// zlib stream holding Latin-1 text. The stream is not decompressed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct zTXt<'b> {
  /// Latin-1 keyword, 1-79 bytes.
  pub keyword: &'b [u8],
  /// The compressed text.
  pub zlib_data: &'b [u8],
}
impl<'b> TryFrom<&'b [u8]> for zTXt<'b> {
  type Error = PayloadError;
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (keyword, next) = split_keyword(data)?;
    match read_u8(data, next)? {
      0 => Ok(Self { keyword, zlib_data: &data[next + 1..] }),
      method => Err(bad_field("compression method", method)),
    }
  }
}
impl<'b> zTXt<'b> {
  /// The keyword as a string.
  #[inline]
  #[must_use]
  pub fn keyword(&self) -> Cow<'b, str> {
    latin1_to_str(self.keyword)
  }
}
impl core::fmt::Display for zTXt<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Keyword: {}, {} bytes of zlib compressed text", self.keyword(), self.zlib_data.len())
  }
}

/// `iTXt`: International textual data
///
/// Spec: [iTXt](https://www.w3.org/TR/png/#11iTXt)
///
/// Fields, in order:
/// * keyword (Latin-1), null
/// * compression flag (0 or 1)
/// * compression method (must be 0 when the flag is 1)
/// * language tag (ASCII, may be empty), null
/// * translated keyword (UTF-8, may be empty), null
/// * the text: UTF-8, or a zlib stream of UTF-8 when the flag is set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct iTXt<'b> {
  /// Latin-1 keyword, 1-79 bytes.
  pub keyword: &'b [u8],
  /// If `text` is a zlib stream.
  pub compressed: bool,
  /// The compression method byte.
  pub compression_method: u8,
  /// Language tag such as `en-US`.
  pub language: &'b [u8],
  /// The keyword, translated into the target language.
  pub translated_keyword: &'b str,
  /// The text bytes, which are UTF-8 when not compressed.
  pub text: &'b [u8],
}
impl<'b> TryFrom<&'b [u8]> for iTXt<'b> {
  type Error = PayloadError;
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (keyword, next) = split_keyword(data)?;
    let compressed = match read_u8(data, next)? {
      0 => false,
      1 => true,
      flag => return Err(bad_field("compression flag", flag)),
    };
    let compression_method = read_u8(data, next + 1)?;
    if compressed && compression_method != 0 {
      return Err(bad_field("compression method", compression_method));
    }
    let (language, next) = read_null_terminated(data, next + 2)?;
    let translated_start = next;
    let (translated, next) = read_null_terminated(data, translated_start)?;
    let translated_keyword = read_utf8(data, translated_start, translated.len())?;
    let text = &data[next..];
    if !compressed {
      read_utf8(data, next, text.len())?;
    }
    Ok(Self { keyword, compressed, compression_method, language, translated_keyword, text })
  }
}
impl<'b> iTXt<'b> {
  /// The keyword as a string.
  #[inline]
  #[must_use]
  pub fn keyword(&self) -> Cow<'b, str> {
    latin1_to_str(self.keyword)
  }
  /// The language tag as a string.
  #[inline]
  #[must_use]
  pub fn language(&self) -> Cow<'b, str> {
    latin1_to_str(self.language)
  }
  /// The text, if it isn't compressed.
  #[inline]
  #[must_use]
  pub fn text(&self) -> Option<&'b str> {
    if self.compressed {
      None
    } else {
      core::str::from_utf8(self.text).ok()
    }
  }
}
impl core::fmt::Display for iTXt<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Keyword: {}", self.keyword())?;
    if !self.language.is_empty() {
      write!(f, ", language {}", self.language())?;
    }
    if !self.translated_keyword.is_empty() {
      write!(f, ", translated keyword {}", self.translated_keyword)?;
    }
    if self.compressed {
      write!(f, ", {} bytes of zlib compressed text", self.text.len())
    } else {
      write!(f, ", {} bytes of UTF-8 text", self.text.len())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::{string::ToString, vec::Vec};

  #[test]
  fn test_keyword_rules() {
    assert!(check_keyword(b"Title").is_ok());
    assert!(check_keyword(b"").is_err());
    assert!(check_keyword(&[b'a'; 79]).is_ok());
    assert!(check_keyword(&[b'a'; 80]).is_err());
    assert!(check_keyword(b"tab\there").is_err());
    assert!(check_keyword(&[0xE9]).is_ok());
    assert!(check_keyword(&[0x85]).is_err());
  }

  #[test]
  fn test_text_chunk() {
    let t = tEXt::try_from(&b"Author\0Jane Doe"[..]).unwrap();
    assert_eq!(t.keyword(), "Author");
    assert_eq!(t.text(), "Jane Doe");
    assert_eq!(t.to_string(), "Keyword: Author, 8 bytes of text");
    assert!(tEXt::try_from(&b"Author"[..]).is_err());
    assert!(tEXt::try_from(&b"\0text"[..]).is_err());
    assert!(tEXt::try_from(&b"k\0a\0b"[..]).is_err());
    assert_eq!(tEXt::try_from(&b"Empty\0"[..]).unwrap().text(), "");
    // latin-1 comes through as the matching code points
    assert_eq!(tEXt::try_from(&b"k\0caf\xE9"[..]).unwrap().text(), "caf\u{e9}");
  }

  #[test]
  fn test_ztxt_chunk() {
    let z = zTXt::try_from(&b"Comment\0\0\x78\x9c\x03\x00"[..]).unwrap();
    assert_eq!(z.keyword(), "Comment");
    assert_eq!(z.zlib_data.len(), 4);
    assert!(matches!(
      zTXt::try_from(&b"Comment\0\x01abc"[..]),
      Err(PayloadError::BadField { field: "compression method", value: 1 })
    ));
    assert!(zTXt::try_from(&b"Comment\0"[..]).is_err());
  }

  #[test]
  fn test_itxt_chunk() {
    let mut data: Vec<u8> = Vec::new();
    data.extend_from_slice(b"Title\0\0\0fr\0Titre\0");
    data.extend_from_slice("\u{e9}t\u{e9}".as_bytes());
    let i = iTXt::try_from(&data[..]).unwrap();
    assert_eq!(i.keyword(), "Title");
    assert_eq!(i.language(), "fr");
    assert_eq!(i.translated_keyword, "Titre");
    assert_eq!(i.text(), Some("\u{e9}t\u{e9}"));
    assert_eq!(
      i.to_string(),
      "Keyword: Title, language fr, translated keyword Titre, 5 bytes of UTF-8 text"
    );

    let compressed = iTXt::try_from(&b"XML:com.adobe.xmp\0\x01\0\0\0\x78\x9c"[..]).unwrap();
    assert!(compressed.compressed);
    assert_eq!(compressed.text(), None);
    assert!(iTXt::try_from(&b"k\0\x01\x01\0\0"[..]).is_err());
    assert!(iTXt::try_from(&b"k\0\x02\0\0\0"[..]).is_err());
    assert!(iTXt::try_from(&b"k\0\0\0en"[..]).is_err());
    // uncompressed text has to be UTF-8
    assert!(matches!(
      iTXt::try_from(&b"k\0\0\0\0\0\xFF"[..]),
      Err(PayloadError::Read(ReadError::InvalidEncoding { .. }))
    ));
    assert!(iTXt::try_from(&b"k\0\0\0\0\xC3\0"[..]).is_err());
  }
}
