use super::*;

/// `hIST`: Image histogram
///
/// Spec: [hIST](https://www.w3.org/TR/png/#11hIST)
///
/// Gives the approximate usage frequency of each color in the palette. There
/// should be exactly one entry per `PLTE` entry, and a zero entry means that
/// palette entry is not used at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct hIST<'b>(&'b [U16BE]);
impl<'b> TryFrom<&'b [u8]> for hIST<'b> {
  type Error = PayloadError;
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    match U16BE::slice_from_bytes(data) {
      Some(entries) if (1..=256).contains(&entries.len()) => Ok(Self(entries)),
      _ => Err(bad_length(PngChunkTy::hIST, "an even number from 2 to 512", data)),
    }
  }
}
impl<'b> hIST<'b> {
  /// The frequency entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &'b [U16BE] {
    self.0
  }
}
impl core::fmt::Display for hIST<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let unused = self.0.iter().filter(|e| e.to_u16() == 0).count();
    write!(f, "Histogram of {} palette entries ({unused} unused)", self.0.len())
  }
}
