use super::*;

/// `cICP`: Coding-independent code points
///
/// Spec: [cICP](https://www.w3.org/TR/png-3/#cICP-chunk)
///
/// Identifies the color space with ITU-T H.273 code points. PNG only allows
/// RGB, so the matrix coefficients are always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct cICP {
  pub color_primaries: u8,
  pub transfer_function: u8,
  pub matrix_coefficients: u8,
  pub video_full_range: bool,
}
impl TryFrom<&[u8]> for cICP {
  type Error = PayloadError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let [color_primaries, transfer_function, matrix_coefficients, full_range] = *data else {
      return Err(bad_length(PngChunkTy::cICP, "exactly 4 bytes", data));
    };
    if matrix_coefficients != 0 {
      return Err(bad_field("matrix coefficients", matrix_coefficients));
    }
    let video_full_range = match full_range {
      0 => false,
      1 => true,
      other => return Err(bad_field("video full range flag", other)),
    };
    Ok(Self { color_primaries, transfer_function, matrix_coefficients, video_full_range })
  }
}
impl core::fmt::Display for cICP {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let transfer = match self.transfer_function {
      1 | 6 | 14 | 15 => " (BT.709)",
      8 => " (linear)",
      13 => " (sRGB)",
      16 => " (PQ)",
      18 => " (HLG)",
      _ => "",
    };
    write!(
      f,
      "Primaries {}, transfer {}{transfer}, matrix {}, {} range",
      self.color_primaries,
      self.transfer_function,
      self.matrix_coefficients,
      if self.video_full_range { "full" } else { "narrow" }
    )
  }
}
