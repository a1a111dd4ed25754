use super::*;

/// Rendering intent for sRGB data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SrgbIntent {
  /// for images preferring good adaptation to the output device gamut at the
  /// expense of colorimetric accuracy, such as photographs.
  Perceptual = 0,
  /// for images requiring colour appearance matching (relative to the output
  /// device white point), such as logos.
  RelativeColorimetric = 1,
  /// for images preferring preservation of saturation at the expense of hue and
  /// lightness, such as charts and graphs.
  Saturation = 2,
  /// for images requiring preservation of absolute colorimetry, such as
  /// previews of images destined for a different output device (proofs).
  AbsoluteColorimetric = 3,
}

/// `sRGB`: Standard RGB colour space
///
/// Spec: [sRGB](https://www.w3.org/TR/png/#11sRGB)
///
/// If present, the image samples conform to the sRGB colour space and should
/// be displayed using the given rendering intent. It overrides `gAMA` and
/// `cHRM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct sRGB {
  /// The rendering intent.
  pub intent: SrgbIntent,
}
impl TryFrom<&[u8]> for sRGB {
  type Error = PayloadError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let intent = match *data {
      [0] => SrgbIntent::Perceptual,
      [1] => SrgbIntent::RelativeColorimetric,
      [2] => SrgbIntent::Saturation,
      [3] => SrgbIntent::AbsoluteColorimetric,
      [other] => return Err(bad_field("rendering intent", other)),
      _ => return Err(bad_length(PngChunkTy::sRGB, "exactly 1 byte", data)),
    };
    Ok(Self { intent })
  }
}
impl core::fmt::Display for sRGB {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let name = match self.intent {
      SrgbIntent::Perceptual => "Perceptual",
      SrgbIntent::RelativeColorimetric => "Relative colorimetric",
      SrgbIntent::Saturation => "Saturation",
      SrgbIntent::AbsoluteColorimetric => "Absolute colorimetric",
    };
    write!(f, "sRGB, rendering intent {} ({name})", self.intent as u8)
  }
}
