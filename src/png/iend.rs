use super::*;

/// `IEND`: Image trailer
///
/// Marks the end of the PNG datastream. It never has any data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IEND;
impl TryFrom<&[u8]> for IEND {
  type Error = PayloadError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    if data.is_empty() {
      Ok(IEND)
    } else {
      Err(bad_length(PngChunkTy::IEND, "empty", data))
    }
  }
}
impl core::fmt::Display for IEND {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("End of image")
  }
}
