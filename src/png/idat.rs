/// `IDAT`: Image data
///
/// * Image data is stored with Zlib compression applied.
/// * Images can have more than one IDAT chunk. They should all be stored in a
///   row. Multiple chunks are treated as a single Zlib datastream.
///
/// The data is only identified here, never decompressed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IDAT<'b>(&'b [u8]);
impl<'b> From<&'b [u8]> for IDAT<'b> {
  #[inline]
  fn from(data: &'b [u8]) -> Self {
    Self(data)
  }
}
impl core::fmt::Debug for IDAT<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("IDAT").field(&&self.0[..self.0.len().min(12)]).field(&self.0.len()).finish()
  }
}
impl core::fmt::Display for IDAT<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{} bytes of compressed image data", self.0.len())
  }
}
impl<'b> IDAT<'b> {
  /// The compressed bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &'b [u8] {
    self.0
  }
}

#[test]
fn test_idat_is_opaque() {
  let data = [0x78, 0x9C, 0x03, 0x00];
  let idat = IDAT::from(&data[..]);
  assert_eq!(idat.as_bytes(), &data);
  assert_eq!(alloc::format!("{idat}"), "4 bytes of compressed image data");
}
