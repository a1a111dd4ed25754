use super::*;

/// `tRNS`: Transparency
///
/// Spec: [tRNS](https://www.w3.org/TR/png/#11tRNS)
///
/// * `Grayscale` and `Truecolor` each store a single color. All pixels of that
///   color in the image are fully transparent, while the rest are fully
///   opaque. The value is always stored as a `u16`, even if the image's bit
///   depth is less than 16.
/// * `Indexed` has an alpha value that goes along with each palette entry.
///   There can be fewer alpha entries than palette entries; missing entries
///   are fully opaque.
/// * `Unchecked` is used when there was no image header to say which layout
///   applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum tRNS<'b> {
  Grayscale { y: u16 },
  Truecolor { r: u16, g: u16, b: u16 },
  Indexed { alphas: &'b [u8] },
  Unchecked { len: usize },
}
impl<'b> tRNS<'b> {
  /// Decodes the chunk using the image's color type.
  pub fn from_data(data: &'b [u8], header: Option<&IHDR>) -> Result<Self, PayloadError> {
    let Some(header) = header else {
      return Ok(Self::Unchecked { len: data.len() });
    };
    Ok(match (header.color_type, data) {
      (PngColorType::Grayscale, [y0, y1]) => Self::Grayscale { y: u16::from_be_bytes([*y0, *y1]) },
      (PngColorType::Grayscale, _) => {
        return Err(bad_length(PngChunkTy::tRNS, "2 bytes for grayscale", data))
      }
      (PngColorType::Truecolor, [r0, r1, g0, g1, b0, b1]) => Self::Truecolor {
        r: u16::from_be_bytes([*r0, *r1]),
        g: u16::from_be_bytes([*g0, *g1]),
        b: u16::from_be_bytes([*b0, *b1]),
      },
      (PngColorType::Truecolor, _) => {
        return Err(bad_length(PngChunkTy::tRNS, "6 bytes for truecolor", data))
      }
      (PngColorType::Indexed, alphas) if (1..=256).contains(&alphas.len()) => {
        Self::Indexed { alphas }
      }
      (PngColorType::Indexed, _) => {
        return Err(bad_length(PngChunkTy::tRNS, "1 to 256 bytes for indexed color", data))
      }
      (color_type @ (PngColorType::GrayscaleAlpha | PngColorType::TruecolorAlpha), _) => {
        return Err(PayloadError::NotAllowedForColorType {
          ty: PngChunkTy::tRNS,
          color_type: color_type as u8,
        })
      }
    })
  }
}
impl core::fmt::Display for tRNS<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Grayscale { y } => write!(f, "Transparent gray level {y}"),
      Self::Truecolor { r, g, b } => write!(f, "Transparent color rgb({r}, {g}, {b})"),
      Self::Indexed { alphas } => {
        let clear = alphas.iter().filter(|a| **a == 0).count();
        write!(f, "Alpha for {} palette entries ({clear} fully transparent)", alphas.len())
      }
      Self::Unchecked { len } => write!(f, "{len} bytes (no image header, layout unknown)"),
    }
  }
}
