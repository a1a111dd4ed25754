//! Holds all the tools for inspecting PNG data.
//!
//! The general format of a PNG is that the information is stored in "chunks".
//! After the 8 byte signature, every chunk is:
//! * a 4 byte big-endian length,
//! * a 4 byte type tag such as `IHDR`,
//! * `length` bytes of payload,
//! * a 4 byte CRC of the type and the payload.
//!
//! There's four "critical" chunk types:
//! * **Header** (`IHDR`) - The image's dimensions, pixel format, and if the
//!   image is interlaced or not. It must be the very first chunk, and the
//!   layout of several other chunks depends on it.
//! * **Palette** (`PLTE`) - If an image uses indexed color it will have a
//!   palette of what index values map to what `RGB8` values.
//! * **Image Data** (`IDAT`) - One or more chunks of compressed data. All of
//!   the compressed data forms a single zlib data stream.
//! * **End** (`IEND`) - The last chunk, lets you know you had the full PNG and
//!   your data wasn't truncated accidentally.
//!
//! Everything else is "ancillary": color space hints, text, timestamps,
//! animation control, and so on.
//!
//! ## Inspecting a PNG
//!
//! There's three levels to work at:
//! * [`PngChunkScanner`] iterates the raw chunk framing, reporting
//!   [`ScanEvent`]s.
//! * [`parse_png`] collects the chunks and warnings into a [`ParseResult`],
//!   applying the [`ParseMode`] policy.
//! * [`inspect`] also decodes every payload, giving one [`ChunkReport`] per
//!   chunk. A [`MetadataAudit`] can then be built from the result.
//!
//! ```no_run
//! # use pngscope::{png::*, PngError};
//! # let bytes: &[u8] = &[];
//! let parsed = parse_png(bytes, ParseMode::Strict)?;
//! let header = parsed.header();
//! for chunk in parsed.chunks.iter() {
//!   match summarize(chunk, header.as_ref()) {
//!     Ok(summary) => println!("{} @ {}: {summary}", chunk.ty(), chunk.offset()),
//!     Err(e) => println!("{} @ {}: error: {e}", chunk.ty(), chunk.offset()),
//!   }
//! }
//! # Ok::<(), PngError>(())
//! ```

#![allow(nonstandard_style)]

use alloc::{
  borrow::Cow,
  format,
  string::{String, ToString},
  vec::Vec,
};
use core::fmt::Write;

use crate::*;

mod crc32;
pub use crc32::*;

mod chunk;
pub use chunk::*;

mod scan;
pub use scan::*;

mod parse;
pub use parse::*;

mod payload;
pub use payload::*;

mod inspect;
pub use inspect::*;

mod audit;
pub use audit::*;

mod ihdr;
pub use ihdr::*;

mod plte;
pub use plte::*;

mod idat;
pub use idat::*;

mod iend;
pub use iend::*;

mod trns;
pub use trns::*;

mod chrm;
pub use chrm::*;

mod gama;
pub use gama::*;

mod iccp;
pub use iccp::*;

mod sbit;
pub use sbit::*;

mod srgb;
pub use srgb::*;

mod cicp;
pub use cicp::*;

mod text;
pub use text::*;

mod bkgd;
pub use bkgd::*;

mod hist;
pub use hist::*;

mod phys;
pub use phys::*;

mod splt;
pub use splt::*;

mod time;
pub use time::*;

mod exif;
pub use exif::*;

mod actl;
pub use actl::*;

mod fctl;
pub use fctl::*;

mod fdat;
pub use fdat::*;

#[cfg(test)]
mod tests;
