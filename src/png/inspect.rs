use super::*;

/// A chunk along with its decoded payload (or the reason it didn't decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkReport<'b> {
  /// The chunk itself.
  pub chunk: PngChunk<'b>,
  /// The decoded payload.
  pub payload: Result<ChunkPayload<'b>, PayloadError>,
}
impl<'b> ChunkReport<'b> {
  /// The one line summary, or the error message if the payload was bad.
  #[must_use]
  pub fn summary(&self) -> String {
    match &self.payload {
      Ok(payload) => payload.to_string(),
      Err(e) => e.to_string(),
    }
  }

  /// The raw text body, for `tEXt` and uncompressed `iTXt` chunks.
  #[inline]
  #[must_use]
  pub fn text(&self) -> Option<Cow<'b, str>> {
    self.payload.as_ref().ok()?.text()
  }

  /// If the payload decoded without error.
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.payload.is_ok()
  }
}

/// Everything this crate can say about a PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection<'b> {
  /// The chunk stream and its warnings.
  pub parsed: ParseResult<'b>,
  /// The image header, if the first chunk is a valid `IHDR`.
  pub header: Option<IHDR>,
  /// One report per chunk, in file order.
  pub reports: Vec<ChunkReport<'b>>,
}
impl<'b> Inspection<'b> {
  /// The reports for every chunk of the given type.
  pub fn reports_of(&self, ty: PngChunkTy) -> impl Iterator<Item = &ChunkReport<'b>> + '_ {
    self.reports.iter().filter(move |r| r.chunk.ty() == ty)
  }

  /// If the image has an `acTL` chunk.
  #[inline]
  #[must_use]
  pub fn is_animated(&self) -> bool {
    self.reports_of(PngChunkTy::acTL).next().is_some()
  }
}

/// Parses the chunk stream and then decodes every chunk's payload.
///
/// The `IHDR` from the first chunk (if any) is the context for the chunks that
/// need it.
///
/// ## Failure
/// * Any error from [`parse_png`].
pub fn inspect(bytes: &[u8], mode: ParseMode) -> Result<Inspection<'_>, PngError> {
  let parsed = parse_png(bytes, mode)?;
  let header = parsed.header();
  let reports = parsed
    .chunks
    .iter()
    .map(|chunk| ChunkReport { chunk: *chunk, payload: ChunkPayload::decode(chunk, header.as_ref()) })
    .collect();
  Ok(Inspection { parsed, header, reports })
}
