//! Error and warning types.
//!
//! There's three levels of trouble you can run into:
//!
//! * [`PngError`] is fatal. The bytes aren't a PNG at all (or, in strict mode,
//!   the chunk stream broke a structural rule) and you get no chunks back.
//! * [`StreamWarning`] is recoverable. It's collected into the parse result
//!   and the scan keeps going as best it can.
//! * [`PayloadError`] is local to one chunk. The chunk's payload didn't follow
//!   the grammar for its type, and that chunk alone gets an error instead of a
//!   summary.

use crate::png::PngChunkTy;

/// A failure from one of the bounds-checked binary readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ReadError {
  /// The read would go past the end of the buffer.
  #[error("read of {size} bytes at offset {offset} is out of bounds (buffer is {len} bytes)")]
  OutOfBounds {
    /// Where the read started.
    offset: usize,
    /// How many bytes were wanted.
    size: usize,
    /// How many bytes the buffer has.
    len: usize,
  },

  /// The bytes weren't valid UTF-8.
  #[error("invalid UTF-8 at offset {offset} (valid up to byte {valid_up_to})")]
  InvalidEncoding {
    /// Where the text field started.
    offset: usize,
    /// How many bytes of the field were valid.
    valid_up_to: usize,
  },

  /// A null-terminated field never found its null byte.
  #[error("no null terminator after offset {offset}")]
  MissingNul {
    /// Where the field started.
    offset: usize,
  },
}

/// A structural problem found while scanning the chunk stream.
///
/// In lenient mode these are collected and the scan continues (or stops
/// cleanly). In strict mode the first one becomes a [`PngError::Structural`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StreamWarning {
  /// The declared length is 2^31 or more, which the PNG format forbids.
  #[error("chunk at offset {offset} declares length {length}, which exceeds 2^31-1")]
  LengthTooLarge {
    /// Offset of the chunk's length field.
    offset: usize,
    /// The declared length.
    length: u32,
  },

  /// The type tag isn't four ASCII letters.
  #[error("invalid chunk type {ty:?} at offset {offset} (skipped: {skipped})")]
  BadChunkType {
    /// Offset of the chunk's length field.
    offset: usize,
    /// The bytes found where the type should be.
    ty: PngChunkTy,
    /// If the scanner was able to hop over the chunk.
    skipped: bool,
  },

  /// The data ended partway through a chunk.
  #[error("truncated chunk at offset {offset}: needs {needed} bytes, only {available} remain")]
  Truncated {
    /// Offset of the incomplete chunk.
    offset: usize,
    /// Bytes the chunk needs (length, type, payload, and CRC).
    needed: u64,
    /// Bytes actually left in the buffer.
    available: usize,
  },

  /// The stored CRC doesn't match the computed one. The chunk is still kept.
  #[error("CRC mismatch in {ty:?} chunk at offset {offset}: stored {declared:#010X}, computed {actual:#010X}")]
  ChecksumMismatch {
    /// Offset of the chunk.
    offset: usize,
    /// Type of the chunk.
    ty: PngChunkTy,
    /// CRC stored in the file.
    declared: u32,
    /// CRC computed from the type and payload.
    actual: u32,
  },

  /// An `IHDR` chunk was found somewhere other than first.
  #[error("IHDR chunk at offset {offset} is not the first chunk")]
  HeaderNotFirst {
    /// Offset of the misplaced chunk.
    offset: usize,
  },

  /// There's data after the `IEND` chunk.
  #[error("{count} bytes of trailing data after IEND at offset {offset}")]
  TrailingData {
    /// Offset just past the `IEND` chunk.
    offset: usize,
    /// How many bytes follow it.
    count: usize,
  },

  /// The stream ended without an `IEND` chunk.
  #[error("no IEND chunk found, the file may be truncated")]
  MissingTerminator,

  /// The stream doesn't contain any `IDAT` chunk.
  #[error("no IDAT chunk found")]
  MissingImageData,
}

/// A fatal parsing error. No chunk list is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PngError {
  /// The first 8 bytes are not the PNG signature (or there aren't 8 bytes).
  #[error("not a PNG file (signature mismatch)")]
  NotAPngFile,

  /// No conforming 13 byte `IHDR` chunk could be recorded.
  #[error("no IHDR chunk found")]
  MissingHeaderChunk,

  /// Strict mode only: a structural rule was broken.
  #[error(transparent)]
  Structural(#[from] StreamWarning),
}

/// A chunk's payload doesn't follow the grammar for its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PayloadError {
  /// The payload has a length that's impossible for the chunk type.
  #[error("{ty:?} must be {expected}, found {actual} bytes")]
  BadLength {
    /// Chunk type.
    ty: PngChunkTy,
    /// Description of the allowed length(s).
    expected: &'static str,
    /// Actual payload length.
    actual: usize,
  },

  /// `IHDR` or `fcTL` has a width or height of 0.
  #[error("Zero width or height")]
  ZeroDimensions,

  /// Color type is not one of 0, 2, 3, 4, 6.
  #[error("invalid color type {0}")]
  BadColorType(u8),

  /// Bit depth is not allowed with the color type.
  #[error("bit depth {bit_depth} is not allowed for color type {color_type}")]
  BadBitDepth {
    /// The bit depth.
    bit_depth: u8,
    /// The color type.
    color_type: u8,
  },

  /// A single-byte field has a value outside its allowed set.
  #[error("invalid {field}: {value}")]
  BadField {
    /// Name of the field.
    field: &'static str,
    /// Value found.
    value: u32,
  },

  /// A keyword (or profile/palette name) is empty, too long, or has bytes that
  /// aren't printable Latin-1.
  #[error("invalid keyword: {0}")]
  BadKeyword(&'static str),

  /// The chunk is not allowed with this image's color type.
  #[error("{ty:?} is not allowed with color type {color_type}")]
  NotAllowedForColorType {
    /// Chunk type.
    ty: PngChunkTy,
    /// The image color type.
    color_type: u8,
  },

  /// A significant bits value is 0 or exceeds the sample depth.
  #[error("significant bits value {value} is outside 1..={max}")]
  BadSignificantBits {
    /// The value found.
    value: u8,
    /// The sample depth.
    max: u8,
  },

  /// A lower level read failed.
  #[error(transparent)]
  Read(#[from] ReadError),
}
