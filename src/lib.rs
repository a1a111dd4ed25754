#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for looking inside of PNG files.
//!
//! The library walks the chunk stream of a PNG, checks each chunk's CRC, and
//! gives back a human readable summary of what every chunk holds. Compressed
//! data (image data, compressed text, ICC profiles) is identified but never
//! inflated.
//!
//! The whole thing works on a single in-memory byte slice, and everything that
//! comes out of a parse borrows from that slice.
//!
//! ```no_run
//! use pngscope::png::*;
//! let bytes: &[u8] = unimplemented!("data from somewhere");
//! let inspection = inspect(bytes, ParseMode::Lenient).unwrap();
//! for report in inspection.reports.iter() {
//!   println!("{:?}: {}", report.chunk.ty(), report.summary());
//! }
//! ```

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod error;
pub use error::*;

pub mod int_endian;
pub use int_endian::*;

mod parser_helpers;
pub use parser_helpers::*;

pub mod png;
