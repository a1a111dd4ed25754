use super::*;

/// `sBIT`: Significant bits
///
/// Spec: [sBIT](https://www.w3.org/TR/png/#11sBIT)
///
/// Gives the original number of significant bits per channel in the image.
///
/// * Each value must be more than 0 and no more than the sample depth (which
///   is 8 for indexed color, and the bit depth otherwise).
/// * Indexed color uses the `Truecolor` layout, one value per palette channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum sBIT {
  Grayscale { y: u8 },
  Truecolor { r: u8, g: u8, b: u8 },
  GrayscaleAlpha { y: u8, a: u8 },
  TruecolorAlpha { r: u8, g: u8, b: u8, a: u8 },
  Unchecked { len: usize },
}
impl sBIT {
  /// Decodes the chunk using the image's color type.
  pub fn from_data(data: &[u8], header: Option<&IHDR>) -> Result<Self, PayloadError> {
    let Some(header) = header else {
      return Ok(Self::Unchecked { len: data.len() });
    };
    let out = match (header.color_type, data) {
      (PngColorType::Grayscale, &[y]) => Self::Grayscale { y },
      (PngColorType::Truecolor | PngColorType::Indexed, &[r, g, b]) => Self::Truecolor { r, g, b },
      (PngColorType::GrayscaleAlpha, &[y, a]) => Self::GrayscaleAlpha { y, a },
      (PngColorType::TruecolorAlpha, &[r, g, b, a]) => Self::TruecolorAlpha { r, g, b, a },
      (color_type, _) => {
        let expected = match color_type {
          PngColorType::Grayscale => "1 byte for grayscale",
          PngColorType::Truecolor | PngColorType::Indexed => "3 bytes for truecolor or indexed",
          PngColorType::GrayscaleAlpha => "2 bytes for grayscale with alpha",
          PngColorType::TruecolorAlpha => "4 bytes for truecolor with alpha",
        };
        return Err(bad_length(PngChunkTy::sBIT, expected, data));
      }
    };
    let max = header.sample_depth();
    if let Some(&value) = data.iter().find(|v| **v == 0 || **v > max) {
      return Err(PayloadError::BadSignificantBits { value, max });
    }
    Ok(out)
  }
}
impl core::fmt::Display for sBIT {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Grayscale { y } => write!(f, "Significant bits: gray {y}"),
      Self::Truecolor { r, g, b } => write!(f, "Significant bits: red {r}, green {g}, blue {b}"),
      Self::GrayscaleAlpha { y, a } => write!(f, "Significant bits: gray {y}, alpha {a}"),
      Self::TruecolorAlpha { r, g, b, a } => {
        write!(f, "Significant bits: red {r}, green {g}, blue {b}, alpha {a}")
      }
      Self::Unchecked { len } => write!(f, "{len} bytes (no image header, layout unknown)"),
    }
  }
}
