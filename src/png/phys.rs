use super::*;

/// Units for a [`pHYs`] chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PhysUnit {
  /// Only the aspect ratio is known.
  Unknown = 0,
  /// Pixels per metre.
  Metre = 1,
}

/// `pHYs`: Physical pixel dimensions
///
/// Spec: [pHYs](https://www.w3.org/TR/png/#11pHYs)
///
/// The intended pixel size or aspect ratio for display of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct pHYs {
  /// Pixels per unit on the X axis.
  pub pixels_per_x: u32,
  /// Pixels per unit on the Y axis.
  pub pixels_per_y: u32,
  /// What "per unit" means.
  pub unit: PhysUnit,
}
impl TryFrom<&[u8]> for pHYs {
  type Error = PayloadError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let [x0, x1, x2, x3, y0, y1, y2, y3, unit] = *data else {
      return Err(bad_length(PngChunkTy::pHYs, "exactly 9 bytes", data));
    };
    let unit = match unit {
      0 => PhysUnit::Unknown,
      1 => PhysUnit::Metre,
      other => return Err(bad_field("unit specifier", other)),
    };
    Ok(Self {
      pixels_per_x: u32::from_be_bytes([x0, x1, x2, x3]),
      pixels_per_y: u32::from_be_bytes([y0, y1, y2, y3]),
      unit,
    })
  }
}
impl pHYs {
  /// Dots per inch on each axis, rounded, if the unit is metres.
  #[inline]
  #[must_use]
  pub fn dpi(&self) -> Option<(u32, u32)> {
    // 1 inch == 0.0254 metres
    let to_dpi = |ppm: u32| ((u64::from(ppm) * 254 + 5000) / 10000) as u32;
    match self.unit {
      PhysUnit::Metre => Some((to_dpi(self.pixels_per_x), to_dpi(self.pixels_per_y))),
      PhysUnit::Unknown => None,
    }
  }
}
impl core::fmt::Display for pHYs {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.dpi() {
      Some((dx, dy)) => write!(
        f,
        "{} x {} pixels per metre ({dx} x {dy} DPI)",
        self.pixels_per_x, self.pixels_per_y
      ),
      None => write!(f, "Aspect ratio {} : {} (unit unknown)", self.pixels_per_x, self.pixels_per_y),
    }
  }
}

#[test]
fn test_phys() {
  use alloc::string::ToString;
  let mut data = [0_u8; 9];
  data[0..4].copy_from_slice(&2835_u32.to_be_bytes());
  data[4..8].copy_from_slice(&2835_u32.to_be_bytes());
  data[8] = 1;
  let p = pHYs::try_from(&data[..]).unwrap();
  assert_eq!(p.dpi(), Some((72, 72)));
  assert_eq!(p.to_string(), "2835 x 2835 pixels per metre (72 x 72 DPI)");
  data[8] = 0;
  assert_eq!(pHYs::try_from(&data[..]).unwrap().dpi(), None);
  data[8] = 2;
  assert!(pHYs::try_from(&data[..]).is_err());
  assert!(pHYs::try_from(&data[..8]).is_err());
}
