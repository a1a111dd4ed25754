use super::*;

/// `fdAT`: Frame data
///
/// Spec: [fdAT](https://www.w3.org/TR/png/#fdAT-chunk)
///
/// Same as `IDAT`, with a sequence number in front.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct fdAT<'b> {
  /// Position in the animation chunk sequence.
  pub sequence_number: u32,
  data: &'b [u8],
}
impl<'b> TryFrom<&'b [u8]> for fdAT<'b> {
  type Error = PayloadError;
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    match read_u32_be(data, 0) {
      Ok(sequence_number) => Ok(Self { sequence_number, data: &data[4..] }),
      Err(_) => Err(bad_length(PngChunkTy::fdAT, "at least 4 bytes", data)),
    }
  }
}
impl<'b> fdAT<'b> {
  /// The compressed frame data.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
}
impl core::fmt::Debug for fdAT<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("fdAT")
      .field("sequence_number", &self.sequence_number)
      .field("len", &self.data.len())
      .finish()
  }
}
impl core::fmt::Display for fdAT<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Frame data #{}, {} bytes of compressed data", self.sequence_number, self.data.len())
  }
}
