//! # trizip-rle: BWT + Block Run-Length Coding
//!
//! Compresses by first applying the Burrows-Wheeler Transform, which gathers
//! equal bytes into long runs, and then run-length coding the result.
//!
//! ## Pipeline
//!
//! ```text
//! encode: bytes → bwt::forward → block::encode_blocks → [index][records]
//! decode: [index][records] → block::decode_blocks → bwt::inverse → bytes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use trizip_rle::{compress, decompress};
//!
//! let original = b"mississippi river";
//! let compressed = compress(original).unwrap();
//! assert_eq!(decompress(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

/// Block run-length coding.
pub mod block;
/// Burrows-Wheeler Transform implementation.
pub mod bwt;
mod codec;
mod polyhash;

pub use block::Block;
pub use codec::{INDEX_BYTES, RleCodec};
pub use polyhash::PolyHash;
pub use trizip_core::{Result, TrizipError};

/// Compress a byte slice into an RLE file image.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(INDEX_BYTES + data.len() / 2);
    RleCodec::new().encode(data, &mut output)?;
    Ok(output)
}

/// Decompress an RLE file image.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(data.len() * 2);
    RleCodec::new().decode(data, &mut output)?;
    Ok(output)
}
