use super::*;

/// `bKGD`: Background color
///
/// Spec: [bKGD](https://www.w3.org/TR/png/#11bKGD)
///
/// RGB and Greyscale colors are always given as `u16` values. The actual color
/// selected should stay within the bit depth range of the rest of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum bKGD {
  Grayscale { y: u16 },
  Truecolor { r: u16, g: u16, b: u16 },
  Index { i: u8 },
  Unchecked { len: usize },
}
impl bKGD {
  /// Decodes the chunk using the image's color type.
  pub fn from_data(data: &[u8], header: Option<&IHDR>) -> Result<Self, PayloadError> {
    let Some(header) = header else {
      return Ok(Self::Unchecked { len: data.len() });
    };
    Ok(match (header.color_type, data) {
      (PngColorType::Grayscale | PngColorType::GrayscaleAlpha, &[y0, y1]) => {
        bKGD::Grayscale { y: u16::from_be_bytes([y0, y1]) }
      }
      (PngColorType::Truecolor | PngColorType::TruecolorAlpha, &[r0, r1, g0, g1, b0, b1]) => {
        bKGD::Truecolor {
          r: u16::from_be_bytes([r0, r1]),
          g: u16::from_be_bytes([g0, g1]),
          b: u16::from_be_bytes([b0, b1]),
        }
      }
      (PngColorType::Indexed, &[i]) => bKGD::Index { i },
      (color_type, _) => {
        let expected = match color_type {
          PngColorType::Grayscale | PngColorType::GrayscaleAlpha => "2 bytes for grayscale",
          PngColorType::Truecolor | PngColorType::TruecolorAlpha => "6 bytes for truecolor",
          PngColorType::Indexed => "1 byte for indexed color",
        };
        return Err(bad_length(PngChunkTy::bKGD, expected, data));
      }
    })
  }
}
impl core::fmt::Display for bKGD {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Grayscale { y } => write!(f, "Background gray level {y}"),
      Self::Truecolor { r, g, b } => write!(f, "Background color rgb({r}, {g}, {b})"),
      Self::Index { i } => write!(f, "Background palette index {i}"),
      Self::Unchecked { len } => write!(f, "{len} bytes (no image header, layout unknown)"),
    }
  }
}
