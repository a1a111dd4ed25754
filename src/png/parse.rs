use super::*;

/// How the parser reacts to structural problems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
  /// Collect warnings and keep going as long as the framing allows.
  #[default]
  Lenient,
  /// The first structural problem of any kind fails the parse. The stream
  /// must also end with `IEND` and contain `IDAT`.
  Strict,
}

/// The chunks of a PNG, in file order, plus anything odd found along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'b> {
  /// Every chunk that could be framed.
  pub chunks: Vec<PngChunk<'b>>,
  /// Structural warnings, in the order they were found.
  pub warnings: Vec<StreamWarning>,
}
impl<'b> ParseResult<'b> {
  /// Decodes the image header, if the first chunk is a valid `IHDR`.
  ///
  /// This is the context that `tRNS`, `sBIT`, and `bKGD` need to be fully
  /// checked.
  #[must_use]
  pub fn header(&self) -> Option<IHDR> {
    let first = self.chunks.first()?;
    if first.ty() != PngChunkTy::IHDR {
      return None;
    }
    IHDR::try_from(first.data()).ok()
  }

  /// The warnings as display strings.
  #[must_use]
  pub fn warning_messages(&self) -> Vec<String> {
    self.warnings.iter().map(|w| w.to_string()).collect()
  }

  /// Chunks whose CRC didn't match.
  pub fn bad_crc_chunks(&self) -> impl Iterator<Item = &PngChunk<'b>> + '_ {
    self.chunks.iter().filter(|c| !c.crc_ok())
  }
}

/// Parses the chunk stream of a PNG.
///
/// ## Failure
/// * [`PngError::NotAPngFile`] if the signature is wrong (or missing).
/// * [`PngError::MissingHeaderChunk`] if there's no 13 byte `IHDR` chunk. In
///   strict mode this also wins over any structural problem found before the
///   header.
/// * [`PngError::Structural`] in [`ParseMode::Strict`] for the first problem
///   that lenient mode would have turned into a warning.
pub fn parse_png(bytes: &[u8], mode: ParseMode) -> Result<ParseResult<'_>, PngError> {
  let mut scanner = PngChunkScanner::new(bytes)?;
  let mut chunks: Vec<PngChunk<'_>> = Vec::new();
  let mut warnings: Vec<StreamWarning> = Vec::new();
  let mut seen_ihdr = false;
  let mut seen_idat = false;
  let mut seen_iend = false;

  for event in scanner.by_ref() {
    let chunk = match event {
      ScanEvent::Warning(w) => {
        note(w, mode, &mut warnings).map_err(|e| before_header(e, seen_ihdr))?;
        continue;
      }
      ScanEvent::Chunk(chunk) => chunk,
    };
    // only a 13 byte IHDR counts as a header, anything else can't be decoded
    if chunk.ty() == PngChunkTy::IHDR && chunk.length() == 13 {
      seen_ihdr = true;
    }
    log::debug!(
      "chunk {ty} at offset {offset}, {len} bytes, crc {crc}",
      ty = chunk.ty(),
      offset = chunk.offset(),
      len = chunk.length(),
      crc = if chunk.crc_ok() { "ok" } else { "BAD" }
    );
    if !chunk.crc_ok() {
      let w = StreamWarning::ChecksumMismatch {
        offset: chunk.offset(),
        ty: chunk.ty(),
        declared: chunk.declared_crc(),
        actual: chunk.compute_actual_crc(),
      };
      note(w, mode, &mut warnings).map_err(|e| before_header(e, seen_ihdr))?;
    }
    match chunk.ty() {
      PngChunkTy::IHDR => {
        if !chunks.is_empty() {
          let w = StreamWarning::HeaderNotFirst { offset: chunk.offset() };
          note(w, mode, &mut warnings).map_err(|e| before_header(e, seen_ihdr))?;
        }
      }
      PngChunkTy::IDAT => seen_idat = true,
      PngChunkTy::IEND => {
        if !seen_iend && chunk.end() < bytes.len() {
          let w =
            StreamWarning::TrailingData { offset: chunk.end(), count: bytes.len() - chunk.end() };
          note(w, mode, &mut warnings).map_err(|e| before_header(e, seen_ihdr))?;
        }
        seen_iend = true;
      }
      _ => (),
    }
    chunks.push(chunk);
  }

  if !seen_ihdr {
    return Err(PngError::MissingHeaderChunk);
  }
  if !seen_iend && !scanner.stopped_early() {
    note(StreamWarning::MissingTerminator, mode, &mut warnings)?;
  }
  if !seen_idat {
    note(StreamWarning::MissingImageData, mode, &mut warnings)?;
  }
  Ok(ParseResult { chunks, warnings })
}

/// A stream that broke before any usable header is reported as having no
/// header at all.
fn before_header(e: PngError, seen_ihdr: bool) -> PngError {
  if seen_ihdr {
    e
  } else {
    PngError::MissingHeaderChunk
  }
}

/// Strict mode turns the warning into an error, lenient mode keeps it.
fn note(w: StreamWarning, mode: ParseMode, warnings: &mut Vec<StreamWarning>) -> Result<(), PngError> {
  log::warn!("{w}");
  match mode {
    ParseMode::Strict => Err(PngError::Structural(w)),
    ParseMode::Lenient => {
      warnings.push(w);
      Ok(())
    }
  }
}
