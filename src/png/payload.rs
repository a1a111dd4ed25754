use super::*;

/// Makes the error for a payload whose length doesn't fit its type.
#[inline]
pub(crate) fn bad_length(ty: PngChunkTy, expected: &'static str, data: &[u8]) -> PayloadError {
  PayloadError::BadLength { ty, expected, actual: data.len() }
}

/// Makes the error for a field value outside the allowed set.
#[inline]
pub(crate) fn bad_field(field: &'static str, value: impl Into<u32>) -> PayloadError {
  PayloadError::BadField { field, value: value.into() }
}

/// Displays a value stored as 100,000 times a decimal, without going through
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fixed5(pub u32);
impl core::fmt::Display for Fixed5 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}.{:05}", self.0 / 100_000, self.0 % 100_000)
  }
}

/// The decoded payload of a chunk.
///
/// There's one variant per chunk type this crate understands, plus `Unknown`
/// for everything else. The `Display` impl gives the one line summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ChunkPayload<'b> {
  IHDR(IHDR),
  PLTE(PLTE<'b>),
  IDAT(IDAT<'b>),
  IEND(IEND),
  tRNS(tRNS<'b>),
  cHRM(cHRM),
  gAMA(gAMA),
  iCCP(iCCP<'b>),
  sBIT(sBIT),
  sRGB(sRGB),
  cICP(cICP),
  tEXt(tEXt<'b>),
  zTXt(zTXt<'b>),
  iTXt(iTXt<'b>),
  bKGD(bKGD),
  hIST(hIST<'b>),
  pHYs(pHYs),
  sPLT(sPLT<'b>),
  tIME(tIME),
  eXIf(eXIf<'b>),
  acTL(acTL),
  fcTL(fcTL),
  fdAT(fdAT<'b>),
  Unknown { ty: PngChunkTy },
}
impl<'b> ChunkPayload<'b> {
  /// Decodes a chunk's payload by its type.
  ///
  /// `header` is the image's `IHDR`, which `tRNS`, `sBIT`, and `bKGD` need to
  /// pick their layout. Without it those chunks decode as `Unchecked`.
  ///
  /// ## Failure
  /// * If the payload doesn't follow the grammar for its chunk type.
  pub fn decode(chunk: &PngChunk<'b>, header: Option<&IHDR>) -> Result<Self, PayloadError> {
    let data = chunk.data();
    let out = match chunk.ty() {
      PngChunkTy::IHDR => IHDR::try_from(data).map(Self::IHDR),
      PngChunkTy::PLTE => PLTE::try_from(data).map(Self::PLTE),
      PngChunkTy::IDAT => Ok(Self::IDAT(IDAT::from(data))),
      PngChunkTy::IEND => IEND::try_from(data).map(Self::IEND),
      PngChunkTy::tRNS => tRNS::from_data(data, header).map(Self::tRNS),
      PngChunkTy::cHRM => cHRM::try_from(data).map(Self::cHRM),
      PngChunkTy::gAMA => gAMA::try_from(data).map(Self::gAMA),
      PngChunkTy::iCCP => iCCP::try_from(data).map(Self::iCCP),
      PngChunkTy::sBIT => sBIT::from_data(data, header).map(Self::sBIT),
      PngChunkTy::sRGB => sRGB::try_from(data).map(Self::sRGB),
      PngChunkTy::cICP => cICP::try_from(data).map(Self::cICP),
      PngChunkTy::tEXt => tEXt::try_from(data).map(Self::tEXt),
      PngChunkTy::zTXt => zTXt::try_from(data).map(Self::zTXt),
      PngChunkTy::iTXt => iTXt::try_from(data).map(Self::iTXt),
      PngChunkTy::bKGD => bKGD::from_data(data, header).map(Self::bKGD),
      PngChunkTy::hIST => hIST::try_from(data).map(Self::hIST),
      PngChunkTy::pHYs => pHYs::try_from(data).map(Self::pHYs),
      PngChunkTy::sPLT => sPLT::try_from(data).map(Self::sPLT),
      PngChunkTy::tIME => tIME::try_from(data).map(Self::tIME),
      PngChunkTy::eXIf => eXIf::try_from(data).map(Self::eXIf),
      PngChunkTy::acTL => acTL::try_from(data).map(Self::acTL),
      PngChunkTy::fcTL => fcTL::try_from(data).map(Self::fcTL),
      PngChunkTy::fdAT => fdAT::try_from(data).map(Self::fdAT),
      ty => Ok(Self::Unknown { ty }),
    };
    if let Err(e) = &out {
      log::debug!("{ty} chunk at offset {offset}: {e}", ty = chunk.ty(), offset = chunk.offset());
    }
    out
  }

  /// The raw text body of a `tEXt` or uncompressed `iTXt` chunk.
  ///
  /// The text is decoded but otherwise exactly as stored.
  #[must_use]
  pub fn text(&self) -> Option<Cow<'b, str>> {
    match self {
      Self::tEXt(t) => Some(t.text()),
      Self::iTXt(t) => t.text().map(Cow::Borrowed),
      _ => None,
    }
  }

  /// The keyword of a text chunk.
  #[must_use]
  pub fn keyword(&self) -> Option<Cow<'b, str>> {
    match self {
      Self::tEXt(t) => Some(t.keyword()),
      Self::zTXt(t) => Some(t.keyword()),
      Self::iTXt(t) => Some(t.keyword()),
      _ => None,
    }
  }
}
impl core::fmt::Display for ChunkPayload<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::IHDR(x) => core::fmt::Display::fmt(x, f),
      Self::PLTE(x) => core::fmt::Display::fmt(x, f),
      Self::IDAT(x) => core::fmt::Display::fmt(x, f),
      Self::IEND(x) => core::fmt::Display::fmt(x, f),
      Self::tRNS(x) => core::fmt::Display::fmt(x, f),
      Self::cHRM(x) => core::fmt::Display::fmt(x, f),
      Self::gAMA(x) => core::fmt::Display::fmt(x, f),
      Self::iCCP(x) => core::fmt::Display::fmt(x, f),
      Self::sBIT(x) => core::fmt::Display::fmt(x, f),
      Self::sRGB(x) => core::fmt::Display::fmt(x, f),
      Self::cICP(x) => core::fmt::Display::fmt(x, f),
      Self::tEXt(x) => core::fmt::Display::fmt(x, f),
      Self::zTXt(x) => core::fmt::Display::fmt(x, f),
      Self::iTXt(x) => core::fmt::Display::fmt(x, f),
      Self::bKGD(x) => core::fmt::Display::fmt(x, f),
      Self::hIST(x) => core::fmt::Display::fmt(x, f),
      Self::pHYs(x) => core::fmt::Display::fmt(x, f),
      Self::sPLT(x) => core::fmt::Display::fmt(x, f),
      Self::tIME(x) => core::fmt::Display::fmt(x, f),
      Self::eXIf(x) => core::fmt::Display::fmt(x, f),
      Self::acTL(x) => core::fmt::Display::fmt(x, f),
      Self::fcTL(x) => core::fmt::Display::fmt(x, f),
      Self::fdAT(x) => core::fmt::Display::fmt(x, f),
      Self::Unknown { ty } => {
        let kind = if ty.is_critical() { "critical" } else { "ancillary" };
        write!(f, "Unknown {kind} chunk")?;
        if ty.is_private() {
          f.write_str(" (private)")?;
        }
        Ok(())
      }
    }
  }
}

/// Gives the one line summary of a chunk's payload.
///
/// ## Failure
/// * If the payload doesn't follow the grammar for its chunk type.
pub fn summarize(chunk: &PngChunk<'_>, header: Option<&IHDR>) -> Result<String, PayloadError> {
  ChunkPayload::decode(chunk, header).map(|p| p.to_string())
}

#[test]
fn test_fixed5() {
  assert_eq!(format!("{}", Fixed5(45455)), "0.45455");
  assert_eq!(format!("{}", Fixed5(31270)), "0.31270");
  assert_eq!(format!("{}", Fixed5(100_000)), "1.00000");
  assert_eq!(format!("{}", Fixed5(u32::MAX)), "42949.67295");
}
