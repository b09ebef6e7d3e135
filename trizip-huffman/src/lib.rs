//! # trizip-huffman: Static Huffman Coding
//!
//! Byte-oriented static Huffman coding. The encoder counts every byte,
//! builds a Huffman tree, and stores the full frequency table in the file
//! header so the decoder can rebuild the identical tree without the tree
//! itself being transmitted.
//!
//! ## Pipeline
//!
//! ```text
//! bytes → FrequencyTable → HuffmanTree → CodeTable → BitWriter → file
//! ```
//!
//! ## Example
//!
//! ```rust
//! use trizip_huffman::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
mod frequency;
mod tree;

pub use codec::{HEADER_BYTES, HuffmanCodec};
pub use frequency::{FREQUENCY_TABLE_BYTES, FrequencyTable, SYMBOL_COUNT};
pub use tree::{CodeEntry, CodeTable, HuffmanNode, HuffmanTree};
pub use trizip_core::{Result, TrizipError};

/// Compress a byte slice into a Huffman file image.
///
/// # Example
///
/// ```rust
/// use trizip_huffman::compress;
///
/// let compressed = compress(b"AAAAAAAAAA").unwrap();
/// // 1024-byte frequency table, 4-byte count, 1-byte valid bits, 2 code bytes.
/// assert_eq!(compressed.len(), 1024 + 4 + 1 + 2);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(HEADER_BYTES + data.len() / 2);
    HuffmanCodec::new().encode(data, &mut output)?;
    Ok(output)
}

/// Decompress a Huffman file image.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    HuffmanCodec::new().decode(data, &mut output)?;
    Ok(output)
}

/// Frequency and code tables the encoder would use for `data`.
///
/// Useful for inspecting code lengths without producing a file.
pub fn code_tables(data: &[u8]) -> Result<(FrequencyTable, CodeTable)> {
    let frequencies = FrequencyTable::from_bytes(data)?;
    let codes = HuffmanTree::from_frequencies(&frequencies).code_table();
    Ok((frequencies, codes))
}
