use super::*;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Grayscale = 0,
  /// Red, Green, Blue
  Truecolor = 2,
  /// Index into a palette.
  ///
  /// The palette will have RGB8 data. There may optionally be a transparency
  /// chunk.
  Indexed = 3,
  /// Greyscale + Alpha
  GrayscaleAlpha = 4,
  /// Red, Green, Blue, Alpha
  TruecolorAlpha = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Grayscale => 1,
      Self::Truecolor => 3,
      Self::Indexed => 1,
      Self::GrayscaleAlpha => 2,
      Self::TruecolorAlpha => 4,
    }
  }
  /// The bit depths allowed with this color type.
  #[inline]
  #[must_use]
  pub const fn allowed_bit_depths(self) -> &'static [u8] {
    match self {
      Self::Grayscale => &[1, 2, 4, 8, 16],
      Self::Indexed => &[1, 2, 4, 8],
      Self::Truecolor | Self::GrayscaleAlpha | Self::TruecolorAlpha => &[8, 16],
    }
  }
  /// The name the PNG spec uses for this color type.
  #[inline]
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Grayscale => "Grayscale",
      Self::Truecolor => "Truecolor",
      Self::Indexed => "Indexed-color",
      Self::GrayscaleAlpha => "Grayscale with alpha",
      Self::TruecolorAlpha => "Truecolor with alpha",
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = PayloadError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Grayscale,
      2 => PngColorType::Truecolor,
      3 => PngColorType::Indexed,
      4 => PngColorType::GrayscaleAlpha,
      6 => PngColorType::TruecolorAlpha,
      _ => return Err(PayloadError::BadColorType(value)),
    })
  }
}

/// `IHDR`: Image header
///
/// Spec: [IHDR](https://www.w3.org/TR/png/#11IHDR)
///
/// The header also serves as the context for decoding the chunks whose layout
/// depends on the color type (`tRNS`, `sBIT`, `bKGD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel (or per palette index)
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// always 0 (zlib deflate)
  pub compression_method: u8,
  /// always 0 (adaptive filtering)
  pub filter_method: u8,
  /// 0 for none, 1 for Adam7
  pub interlace_method: u8,
}
impl IHDR {
  /// If the image data is stored interlaced.
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method == 1
  }

  /// Bits for each full pixel.
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(&self) -> usize {
    (self.bit_depth as usize) * self.color_type.channel_count()
  }

  /// The largest value a significant bits entry may have.
  ///
  /// Indexed images have 8-bit palette entries regardless of bit depth.
  #[inline]
  #[must_use]
  pub const fn sample_depth(&self) -> u8 {
    match self.color_type {
      PngColorType::Indexed => 8,
      _ => self.bit_depth,
    }
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = PayloadError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    if data.len() != 13 {
      return Err(bad_length(PngChunkTy::IHDR, "exactly 13 bytes", data));
    }
    let width = read_u32_be(data, 0)?;
    let height = read_u32_be(data, 4)?;
    let bit_depth = read_u8(data, 8)?;
    let color_type = read_u8(data, 9)?;
    let compression_method = read_u8(data, 10)?;
    let filter_method = read_u8(data, 11)?;
    let interlace_method = read_u8(data, 12)?;
    if width == 0 || height == 0 {
      return Err(PayloadError::ZeroDimensions);
    }
    let color_type_enum = PngColorType::try_from(color_type)?;
    if !color_type_enum.allowed_bit_depths().contains(&bit_depth) {
      return Err(PayloadError::BadBitDepth { bit_depth, color_type });
    }
    if compression_method != 0 {
      return Err(bad_field("compression method", compression_method));
    }
    if filter_method != 0 {
      return Err(bad_field("filter method", filter_method));
    }
    if interlace_method > 1 {
      return Err(bad_field("interlace method", interlace_method));
    }
    Ok(Self {
      width,
      height,
      bit_depth,
      color_type: color_type_enum,
      compression_method,
      filter_method,
      interlace_method,
    })
  }
}
impl core::fmt::Display for IHDR {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "{w} x {h}, {d}-bit {label} (color type {ct}), compression {c}, filter {fi}, interlace {i} ({il})",
      w = self.width,
      h = self.height,
      d = self.bit_depth,
      label = self.color_type.label(),
      ct = self.color_type as u8,
      c = self.compression_method,
      fi = self.filter_method,
      i = self.interlace_method,
      il = if self.is_interlaced() { "Adam7" } else { "none" },
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::string::ToString;

  fn ihdr_bytes(w: u32, h: u32, depth: u8, color: u8) -> [u8; 13] {
    let mut out = [0; 13];
    out[0..4].copy_from_slice(&w.to_be_bytes());
    out[4..8].copy_from_slice(&h.to_be_bytes());
    out[8] = depth;
    out[9] = color;
    out
  }

  #[test]
  fn test_ihdr_decode() {
    let ihdr = IHDR::try_from(&ihdr_bytes(100, 50, 8, 2)[..]).unwrap();
    assert_eq!((ihdr.width, ihdr.height, ihdr.bit_depth), (100, 50, 8));
    assert_eq!(ihdr.color_type, PngColorType::Truecolor);
    assert_eq!(ihdr.bits_per_pixel(), 24);
    assert_eq!(
      ihdr.to_string(),
      "100 x 50, 8-bit Truecolor (color type 2), compression 0, filter 0, interlace 0 (none)"
    );
  }

  #[test]
  fn test_ihdr_pairings() {
    for (color, depths) in [
      (0, &[1, 2, 4, 8, 16][..]),
      (2, &[8, 16][..]),
      (3, &[1, 2, 4, 8][..]),
      (4, &[8, 16][..]),
      (6, &[8, 16][..]),
    ] {
      for depth in [0, 1, 2, 3, 4, 8, 16, 32] {
        let res = IHDR::try_from(&ihdr_bytes(1, 1, depth, color)[..]);
        assert_eq!(res.is_ok(), depths.contains(&depth), "color {color} depth {depth}");
      }
    }
    assert_eq!(IHDR::try_from(&ihdr_bytes(1, 1, 8, 5)[..]), Err(PayloadError::BadColorType(5)));
  }

  #[test]
  fn test_ihdr_rejects() {
    assert_eq!(IHDR::try_from(&ihdr_bytes(0, 5, 8, 2)[..]), Err(PayloadError::ZeroDimensions));
    assert_eq!(PayloadError::ZeroDimensions.to_string(), "Zero width or height");
    let mut b = ihdr_bytes(1, 1, 8, 2);
    b[10] = 1;
    assert!(matches!(IHDR::try_from(&b[..]), Err(PayloadError::BadField { field: "compression method", value: 1 })));
    b[10] = 0;
    b[11] = 1;
    assert!(IHDR::try_from(&b[..]).is_err());
    b[11] = 0;
    b[12] = 2;
    assert!(IHDR::try_from(&b[..]).is_err());
    b[12] = 1;
    assert!(IHDR::try_from(&b[..]).unwrap().is_interlaced());
    assert!(matches!(IHDR::try_from(&b[..12]), Err(PayloadError::BadLength { actual: 12, .. })));
    let mut long = b.to_vec();
    long.push(0);
    assert!(matches!(IHDR::try_from(&long[..]), Err(PayloadError::BadLength { actual: 14, .. })));
    // zero dimensions are reported before a bad color type
    assert_eq!(IHDR::try_from(&ihdr_bytes(0, 0, 8, 5)[..]), Err(PayloadError::ZeroDimensions));
  }
}
