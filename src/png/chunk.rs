use super::*;

/// A chunk type tag, such as `IHDR`.
///
/// Bit 5 (the lowercase bit) of each byte is a property flag:
/// * 1st byte: ancillary (lowercase) or critical (uppercase).
/// * 2nd byte: private (lowercase) or public (uppercase).
/// * 3rd byte: reserved, should always be uppercase.
/// * 4th byte: safe to copy (lowercase) or unsafe to copy (uppercase).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
#[allow(missing_docs)]
impl PngChunkTy {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const tRNS: Self = Self(*b"tRNS");
  pub const cHRM: Self = Self(*b"cHRM");
  pub const gAMA: Self = Self(*b"gAMA");
  pub const iCCP: Self = Self(*b"iCCP");
  pub const sBIT: Self = Self(*b"sBIT");
  pub const sRGB: Self = Self(*b"sRGB");
  pub const cICP: Self = Self(*b"cICP");
  pub const tEXt: Self = Self(*b"tEXt");
  pub const zTXt: Self = Self(*b"zTXt");
  pub const iTXt: Self = Self(*b"iTXt");
  pub const bKGD: Self = Self(*b"bKGD");
  pub const hIST: Self = Self(*b"hIST");
  pub const pHYs: Self = Self(*b"pHYs");
  pub const sPLT: Self = Self(*b"sPLT");
  pub const tIME: Self = Self(*b"tIME");
  pub const eXIf: Self = Self(*b"eXIf");
  pub const acTL: Self = Self(*b"acTL");
  pub const fcTL: Self = Self(*b"fcTL");
  pub const fdAT: Self = Self(*b"fdAT");
  pub const caBX: Self = Self(*b"caBX");
}
impl PngChunkTy {
  /// If the tag is exactly four ASCII letters.
  #[inline]
  #[must_use]
  pub const fn is_well_formed(self) -> bool {
    let [a, b, c, d] = self.0;
    a.is_ascii_alphabetic()
      && b.is_ascii_alphabetic()
      && c.is_ascii_alphabetic()
      && d.is_ascii_alphabetic()
  }
  /// Critical chunks have an uppercase first letter.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }
  /// Private chunks have a lowercase second letter.
  #[inline]
  #[must_use]
  pub const fn is_private(self) -> bool {
    (self.0[1] & 32) != 0
  }
  /// The third letter is reserved and should be uppercase.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_set(self) -> bool {
    (self.0[2] & 32) != 0
  }
  /// Chunks with a lowercase last letter can be copied by editors that don't
  /// understand them.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }
  /// The tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }
}
impl core::fmt::Debug for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('"')
  }
}
impl core::fmt::Display for PngChunkTy {
  /// Non-letter bytes print as escapes, since a bad tag can hold anything.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for b in self.0 {
      if b.is_ascii_graphic() {
        f.write_char(b as char)?;
      } else {
        write!(f, "\\x{b:02X}")?;
      }
    }
    Ok(())
  }
}

/// One chunk from the chunk stream.
///
/// The payload is a view into the original PNG bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PngChunk<'b> {
  pub(crate) offset: usize,
  pub(crate) ty: PngChunkTy,
  pub(crate) data: &'b [u8],
  pub(crate) declared_crc: u32,
  pub(crate) crc_ok: bool,
}
impl<'b> PngChunk<'b> {
  /// Byte offset of this chunk's length field within the file.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }
  /// The chunk type.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> PngChunkTy {
    self.ty
  }
  /// The declared payload length.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> u32 {
    self.data.len() as u32
  }
  /// The payload bytes.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC stored after the payload.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// If the stored CRC matched the computed one.
  #[inline]
  #[must_use]
  pub const fn crc_ok(&self) -> bool {
    self.crc_ok
  }
  /// Offset of the byte just past this chunk's CRC.
  #[inline]
  #[must_use]
  pub const fn end(&self) -> usize {
    self.offset + 8 + self.data.len() + 4
  }
  /// Computes the CRC of the type and payload.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    png_crc(self.ty.as_bytes(), self.data)
  }
}
impl core::fmt::Debug for PngChunk<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngChunk")
      .field("offset", &self.offset)
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .field("crc_ok", &self.crc_ok)
      .finish()
  }
}

#[test]
fn test_chunk_ty_bits() {
  assert!(PngChunkTy::IHDR.is_critical());
  assert!(!PngChunkTy::tEXt.is_critical());
  assert!(!PngChunkTy::tEXt.is_private());
  assert!(PngChunkTy::caBX.is_private());
  assert!(PngChunkTy::tEXt.is_safe_to_copy());
  assert!(!PngChunkTy::IHDR.is_reserved_bit_set());
  assert!(PngChunkTy(*b"abCd").is_well_formed());
  assert!(!PngChunkTy(*b"ab1d").is_well_formed());
  assert_eq!(alloc::format!("{:?}", PngChunkTy([b'I', 0, b'D', b' '])), "\"I\\x00D\\x20\"");
}
