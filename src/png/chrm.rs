use super::*;

/// `cHRM`: Primary chromaticities and white point
///
/// Spec: [cHRM](https://www.w3.org/TR/png/#11cHRM)
///
/// Values are stored as the CIE 1931 x,y value times 100,000.
///
/// **Example:** A value of 0.3127 would be stored as the integer 31270.
///
/// An `sRGB` chunk or `iCCP` chunk, when present and recognized, overrides the
/// `cHRM` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct cHRM {
  pub white_x: u32,
  pub white_y: u32,
  pub red_x: u32,
  pub red_y: u32,
  pub green_x: u32,
  pub green_y: u32,
  pub blue_x: u32,
  pub blue_y: u32,
}
impl TryFrom<&[u8]> for cHRM {
  type Error = PayloadError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let [white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y] =
      U32BE::array_from_bytes::<8>(data)
        .ok_or_else(|| bad_length(PngChunkTy::cHRM, "exactly 32 bytes", data))?;
    Ok(Self { white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y })
  }
}
impl core::fmt::Display for cHRM {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "White point ({}, {}), red ({}, {}), green ({}, {}), blue ({}, {})",
      Fixed5(self.white_x),
      Fixed5(self.white_y),
      Fixed5(self.red_x),
      Fixed5(self.red_y),
      Fixed5(self.green_x),
      Fixed5(self.green_y),
      Fixed5(self.blue_x),
      Fixed5(self.blue_y),
    )
  }
}
