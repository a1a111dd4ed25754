use super::*;

/// `gAMA`: Image gamma
///
/// Spec: [gAMA](https://www.w3.org/TR/png/#11gAMA)
///
/// The value is stored as an integer 100,000 times the floating point value.
///
/// **Example:** A gamma of 1/2.2 would be stored as the integer 45,455.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct gAMA {
  /// Gamma times 100,000.
  pub gamma: u32,
}
impl TryFrom<&[u8]> for gAMA {
  type Error = PayloadError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let gamma = match *data {
      [a, b, c, d] => u32::from_be_bytes([a, b, c, d]),
      _ => return Err(bad_length(PngChunkTy::gAMA, "exactly 4 bytes", data)),
    };
    if gamma == 0 {
      return Err(bad_field("gamma", 0_u32));
    }
    Ok(Self { gamma })
  }
}
impl core::fmt::Display for gAMA {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Gamma {}", Fixed5(self.gamma))
  }
}
