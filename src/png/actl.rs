use super::*;

/// `acTL`: Animation control
///
/// Spec: [acTL](https://www.w3.org/TR/png/#acTL-chunk)
///
/// Its presence marks the image as an APNG. It must appear before the first
/// `IDAT` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct acTL {
  /// Number of frames (each frame has an `fcTL`).
  pub num_frames: u32,
  /// Times to loop the animation, 0 means forever.
  pub num_plays: u32,
}
impl TryFrom<&[u8]> for acTL {
  type Error = PayloadError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let [num_frames, num_plays] = U32BE::array_from_bytes::<2>(data)
      .ok_or_else(|| bad_length(PngChunkTy::acTL, "exactly 8 bytes", data))?;
    Ok(Self { num_frames, num_plays })
  }
}
impl core::fmt::Display for acTL {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Animation with {} frames, ", self.num_frames)?;
    match self.num_plays {
      0 => f.write_str("loops forever"),
      1 => f.write_str("plays once"),
      n => write!(f, "plays {n} times"),
    }
  }
}
