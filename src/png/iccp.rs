use super::*;

/// `iCCP`: Embedded ICC profile
///
/// Spec: [iCCP](https://www.w3.org/TR/png/#11iCCP)
///
/// * The profile `name` may be any convenient name for referring to the
///   profile. It is case-sensitive.
/// * The `zlib_data` is a zlib data stream, and decompression of this
///   datastream yields the embedded ICC profile.
///
/// If this chunk is present, then the `sRGB` chunk *should not* be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct iCCP<'b> {
  /// Latin-1 profile name, 1-79 bytes.
  pub name: &'b [u8],
  /// The compressed profile.
  pub zlib_data: &'b [u8],
}
impl<'b> TryFrom<&'b [u8]> for iCCP<'b> {
  type Error = PayloadError;
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (name, next) = split_keyword(data)?;
    match read_u8(data, next)? {
      0 => (),
      method => return Err(bad_field("compression method", method)),
    }
    let zlib_data = &data[next + 1..];
    if zlib_data.is_empty() {
      return Err(bad_length(PngChunkTy::iCCP, "non-empty after the profile name", zlib_data));
    }
    Ok(Self { name, zlib_data })
  }
}
impl<'b> iCCP<'b> {
  /// The profile name as a string.
  #[inline]
  #[must_use]
  pub fn name(&self) -> Cow<'b, str> {
    latin1_to_str(self.name)
  }
}
impl core::fmt::Display for iCCP<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Profile: {}, {} bytes of zlib compressed profile", self.name(), self.zlib_data.len())
  }
}
