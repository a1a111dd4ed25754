use super::*;

/// `PLTE`: Palette
///
/// Palette entries are always RGB, 8 bits per channel. If you want to have a
/// paletted image with transparency then the transparency info goes in a
/// separate `tRNS` chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PLTE<'b>(&'b [[u8; 3]]);
impl<'b> TryFrom<&'b [u8]> for PLTE<'b> {
  type Error = PayloadError;
  #[inline]
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    if data.is_empty() || data.len() > 256 * 3 {
      return Err(bad_length(PngChunkTy::PLTE, "a multiple of 3 from 3 to 768", data));
    }
    match bytemuck::try_cast_slice::<u8, [u8; 3]>(data) {
      Ok(entries) => Ok(Self(entries)),
      Err(_) => Err(bad_length(PngChunkTy::PLTE, "a multiple of 3 from 3 to 768", data)),
    }
  }
}
impl core::fmt::Debug for PLTE<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // currently prints no more than 4 palette entries
    f.debug_tuple("PLTE").field(&&self.0[..self.0.len().min(4)]).field(&self.0.len()).finish()
  }
}
impl core::fmt::Display for PLTE<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{} palette entries", self.0.len())?;
    if let Some([r, g, b]) = self.0.first() {
      write!(f, ", first #{r:02X}{g:02X}{b:02X}")?;
    }
    Ok(())
  }
}
impl<'b> PLTE<'b> {
  /// Gets the entries as a slice.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &'b [[u8; 3]] {
    self.0
  }
}

#[test]
fn test_plte() {
  use alloc::string::ToString;
  let plte = PLTE::try_from(&[255, 0, 0, 0, 255, 0][..]).unwrap();
  assert_eq!(plte.entries(), &[[255_u8, 0, 0], [0, 255, 0]]);
  assert_eq!(plte.to_string(), "2 palette entries, first #FF0000");
  assert!(PLTE::try_from(&[][..]).is_err());
  assert!(PLTE::try_from(&[1, 2, 3, 4][..]).is_err());
  assert!(PLTE::try_from(&[0; 768][..]).is_ok());
  assert!(PLTE::try_from(&[0; 771][..]).is_err());
}
