//! # trizip core
//!
//! Core components shared by the trizip codecs.
//!
//! - [`bitstream`]: Bit-level I/O for variable-length codes (Huffman, LZW)
//! - [`framing`]: Big-endian header fields and truncation-aware reads
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI: trizip binary                                      │
//! │     file naming, stream opening, command sequencing     │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codecs                                                  │
//! │     Huffman, BWT + BlockRLE, adaptive LZW               │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     BitReader/BitWriter, framing, TrizipError           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use trizip_core::bitstream::{BitOrder, BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut out = Vec::new();
//! let mut writer = BitWriter::new(&mut out);
//! writer.write_bits(0x101, 9, BitOrder::MsbFirst).unwrap();
//! writer.finish().unwrap();
//!
//! let mut reader = BitReader::new(Cursor::new(out));
//! assert_eq!(reader.read_bits(9, BitOrder::MsbFirst).unwrap(), 0x101);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod framing;

// Re-exports for convenience
pub use bitstream::{BitOrder, BitReader, BitWriter};
pub use error::{Result, TrizipError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitOrder, BitReader, BitWriter};
    pub use crate::error::{Result, TrizipError};
    pub use crate::framing::{read_u32_be, read_u8, write_u32_be};
}
