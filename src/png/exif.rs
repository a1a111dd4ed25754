use super::*;

/// Byte order of an Exif block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExifByteOrder {
  /// `MM`, Motorola order.
  BigEndian,
  /// `II`, Intel order.
  LittleEndian,
}

/// `eXIf`: Exchangeable Image File (Exif) Profile
///
/// Spec: [eXIf](https://www.w3.org/TR/png/#eXIf)
///
/// The data is a TIFF header followed by the Exif IFDs. The format of the IFDs
/// is well outside the PNG spec, so only the header is checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct eXIf<'b> {
  /// The TIFF byte order marker.
  pub byte_order: ExifByteOrder,
  data: &'b [u8],
}
impl<'b> TryFrom<&'b [u8]> for eXIf<'b> {
  type Error = PayloadError;
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    if data.len() < 8 {
      return Err(bad_length(PngChunkTy::eXIf, "at least 8 bytes", data));
    }
    let byte_order = match data[..4] {
      [b'M', b'M', 0, b'*'] => ExifByteOrder::BigEndian,
      [b'I', b'I', b'*', 0] => ExifByteOrder::LittleEndian,
      _ => return Err(bad_field("TIFF byte order marker", read_u16_be(data, 0)?)),
    };
    Ok(Self { byte_order, data })
  }
}
impl<'b> eXIf<'b> {
  /// View the exif data.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
}
impl core::fmt::Debug for eXIf<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("eXIf")
      .field("byte_order", &self.byte_order)
      .field("len", &self.data.len())
      .finish()
  }
}
impl core::fmt::Display for eXIf<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let order = match self.byte_order {
      ExifByteOrder::BigEndian => "big-endian",
      ExifByteOrder::LittleEndian => "little-endian",
    };
    write!(f, "{} bytes of Exif data ({order})", self.data.len())
  }
}

#[test]
fn test_exif() {
  let e = eXIf::try_from(&b"MM\0*\0\0\0\x08"[..]).unwrap();
  assert_eq!(e.byte_order, ExifByteOrder::BigEndian);
  let e = eXIf::try_from(&b"II*\0\x08\0\0\0\0\0"[..]).unwrap();
  assert_eq!(e.byte_order, ExifByteOrder::LittleEndian);
  assert_eq!(e.data().len(), 10);
  assert!(eXIf::try_from(&b"II*\0"[..]).is_err());
  assert!(eXIf::try_from(&b"Exif\0\0MM"[..]).is_err());
}
