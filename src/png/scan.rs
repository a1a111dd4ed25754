use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// Something the scanner found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent<'b> {
  /// A complete chunk.
  Chunk(PngChunk<'b>),
  /// A framing problem. After `Truncated` or an unskippable `BadChunkType`
  /// the scanner ends.
  Warning(StreamWarning),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  AwaitHeader,
  Scanning,
  Done,
}

/// An iterator over the chunk stream of a PNG.
///
/// This only checks the chunk framing: lengths, type tags, and CRCs. It never
/// looks at what the payloads mean, and it never panics on bad input. When the
/// framing breaks in a way that can't be stepped over the scanner reports a
/// warning and then ends.
#[derive(Debug, Clone)]
pub struct PngChunkScanner<'b> {
  bytes: &'b [u8],
  cursor: usize,
  state: ScanState,
  /// Offset of the last oversized length that was already reported.
  reported_length_at: Option<usize>,
}
impl<'b> PngChunkScanner<'b> {
  /// Makes a scanner over the full PNG bytes, signature included.
  ///
  /// ## Failure
  /// * If the bytes don't start with the PNG signature.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Result<Self, PngError> {
    if is_png_header_correct(bytes) {
      Ok(Self {
        bytes,
        cursor: PNG_SIGNATURE.len(),
        state: ScanState::AwaitHeader,
        reported_length_at: None,
      })
    } else {
      Err(PngError::NotAPngFile)
    }
  }

  /// Offset the next chunk will be read from.
  #[inline]
  #[must_use]
  pub const fn cursor(&self) -> usize {
    self.cursor
  }

  /// If no chunk has been produced yet.
  #[inline]
  #[must_use]
  pub const fn awaiting_header(&self) -> bool {
    matches!(self.state, ScanState::AwaitHeader)
  }

  /// If the scan ended before reaching the end of the bytes.
  #[inline]
  #[must_use]
  pub const fn stopped_early(&self) -> bool {
    matches!(self.state, ScanState::Done) && self.cursor < self.bytes.len()
  }

  fn stop(&mut self, warning: StreamWarning) -> Option<ScanEvent<'b>> {
    self.state = ScanState::Done;
    Some(ScanEvent::Warning(warning))
  }
}
impl<'b> Iterator for PngChunkScanner<'b> {
  type Item = ScanEvent<'b>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.state == ScanState::Done {
      return None;
    }
    let offset = self.cursor;
    let available = self.bytes.len() - offset;
    if available == 0 {
      self.state = ScanState::Done;
      return None;
    }
    if available < 8 {
      return self.stop(StreamWarning::Truncated { offset, needed: 12, available });
    }
    // we just checked for 8 bytes, so neither of these can fail
    let length = read_u32_be(self.bytes, offset).ok()?;
    let ty = PngChunkTy(read_byte_array(self.bytes, offset + 4).ok()?);

    if length > (i32::MAX as u32) && self.reported_length_at != Some(offset) {
      // report it, then come back to this same offset on the next call
      self.reported_length_at = Some(offset);
      return Some(ScanEvent::Warning(StreamWarning::LengthTooLarge { offset, length }));
    }

    let needed = 8 + u64::from(length) + 4;
    let fits = needed <= available as u64;
    if !ty.is_well_formed() {
      if fits {
        self.cursor = offset + needed as usize;
        return Some(ScanEvent::Warning(StreamWarning::BadChunkType { offset, ty, skipped: true }));
      }
      return self.stop(StreamWarning::BadChunkType { offset, ty, skipped: false });
    }
    if !fits {
      return self.stop(StreamWarning::Truncated { offset, needed, available });
    }

    let data_start = offset + 8;
    let data = read_bytes(self.bytes, data_start, length as usize).ok()?;
    let declared_crc = read_u32_be(self.bytes, data_start + data.len()).ok()?;
    let crc_ok = declared_crc == png_crc(ty.as_bytes(), data);
    self.cursor = offset + needed as usize;
    self.state = ScanState::Scanning;
    Some(ScanEvent::Chunk(PngChunk { offset, ty, data, declared_crc, crc_ok }))
  }
}
