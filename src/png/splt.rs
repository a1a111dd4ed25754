use super::*;

/// `sPLT`: Suggested palette
///
/// Spec: [sPLT](https://www.w3.org/TR/png/#11sPLT)
///
/// A palette name, a null, the sample depth (8 or 16), and then a series of
/// entries. Each entry is RGBA plus a `u16` frequency: six bytes for 8-bit
/// samples, ten bytes for 16-bit samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct sPLT<'b> {
  /// Latin-1 palette name, 1-79 bytes.
  pub name: &'b [u8],
  /// 8 or 16.
  pub sample_depth: u8,
  /// The raw entry bytes.
  pub entries: &'b [u8],
}
impl<'b> TryFrom<&'b [u8]> for sPLT<'b> {
  type Error = PayloadError;
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (name, next) = split_keyword(data)?;
    let sample_depth = read_u8(data, next)?;
    let entries = &data[next + 1..];
    let expected = match sample_depth {
      8 => "a multiple of 6 entry bytes for 8-bit samples",
      16 => "a multiple of 10 entry bytes for 16-bit samples",
      other => return Err(bad_field("sample depth", other)),
    };
    let s = Self { name, sample_depth, entries };
    if entries.len() % s.entry_size() != 0 {
      return Err(bad_length(PngChunkTy::sPLT, expected, entries));
    }
    Ok(s)
  }
}
impl<'b> sPLT<'b> {
  /// The palette name as a string.
  #[inline]
  #[must_use]
  pub fn name(&self) -> Cow<'b, str> {
    latin1_to_str(self.name)
  }
  /// Bytes per entry.
  #[inline]
  #[must_use]
  pub const fn entry_size(&self) -> usize {
    if self.sample_depth == 16 {
      10
    } else {
      6
    }
  }
  /// Number of entries.
  #[inline]
  #[must_use]
  pub const fn entry_count(&self) -> usize {
    self.entries.len() / self.entry_size()
  }
}
impl core::fmt::Display for sPLT<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "Palette: {}, {}-bit samples, {} entries",
      self.name(),
      self.sample_depth,
      self.entry_count()
    )
  }
}

#[test]
fn test_splt() {
  let s = sPLT::try_from(&b"six\0\x08abcdefABCDEF"[..]).unwrap();
  assert_eq!((s.sample_depth, s.entry_count()), (8, 2));
  let s = sPLT::try_from(&b"ten\0\x100123456789"[..]).unwrap();
  assert_eq!((s.sample_depth, s.entry_count()), (16, 1));
  assert!(sPLT::try_from(&b"bad\0\x08abcde"[..]).is_err());
  assert!(sPLT::try_from(&b"bad\0\x04"[..]).is_err());
  assert!(sPLT::try_from(&b"nodepth\0"[..]).is_err());
}
