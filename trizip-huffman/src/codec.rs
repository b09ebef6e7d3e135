//! Huffman file encoder and decoder.
//!
//! # File Layout
//!
//! ```text
//! ┌──────────────────────┬──────────────┬────────────┬──────────────────┐
//! │ 256 × u32 BE counts  │ u32 BE count │ u8 valid   │ code bytes       │
//! │ (symbol 0..255)      │ of code bytes│ bits (0-7) │ (LSB-first bits) │
//! └──────────────────────┴──────────────┴────────────┴──────────────────┘
//! ```
//!
//! The code-byte sequence always ends with the (possibly empty) partial byte,
//! so `count = full_bytes + 1` and the payload holds
//! `(count - 1) * 8 + valid` meaningful bits.

use crate::frequency::{FREQUENCY_TABLE_BYTES, FrequencyTable};
use crate::tree::{CodeEntry, CodeTable, HuffmanNode, HuffmanTree};
use log::debug;
use std::io::{Cursor, Read, Write};
use trizip_core::bitstream::{BitOrder, BitReader, BitWriter};
use trizip_core::error::{Result, TrizipError};
use trizip_core::framing::{checked_u32_len, read_u8, read_u32_be, write_u32_be};

/// Size of the fixed header: frequency table, byte count, valid-bit count.
pub const HEADER_BYTES: usize = FREQUENCY_TABLE_BYTES + 4 + 1;

/// Static Huffman codec.
///
/// The tree is rebuilt on every call; the only state kept between calls is
/// the diagnostic copy of the most recent frequency and code tables.
#[derive(Debug, Default)]
pub struct HuffmanCodec {
    last_tables: Option<(FrequencyTable, CodeTable)>,
}

impl HuffmanCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequency and code tables used by the most recent encode or decode.
    pub fn last_tables(&self) -> Option<&(FrequencyTable, CodeTable)> {
        self.last_tables.as_ref()
    }

    /// Forget the tables of the previous call.
    pub fn reset(&mut self) {
        self.last_tables = None;
    }

    /// Compress everything readable from `input` into `output`.
    pub fn encode<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        self.reset();

        let mut data = Vec::new();
        input.read_to_end(&mut data)?;

        let frequencies = FrequencyTable::from_bytes(&data)?;
        let codes = HuffmanTree::from_frequencies(&frequencies).code_table();

        let mut payload = Vec::with_capacity(data.len() / 2 + 1);
        let mut writer = BitWriter::new(&mut payload);
        for &byte in &data {
            write_code(&mut writer, codes.get(byte))?;
        }
        let valid_bits = writer.pending_bits();
        let payload_bits = writer.bits_written();
        writer.finish()?;
        if valid_bits == 0 {
            // The final byte is always present, even when it carries no bits.
            payload.push(0);
        }

        debug!(
            "huffman encode: {} bytes, {} symbols, {} payload bits, max code length {}",
            data.len(),
            frequencies.distinct_symbols(),
            payload_bits,
            codes.max_length()
        );

        frequencies.write_to(&mut output)?;
        write_u32_be(&mut output, checked_u32_len(payload.len())?)?;
        output.write_all(&[valid_bits])?;
        output.write_all(&payload)?;
        output.flush()?;

        self.last_tables = Some((frequencies, codes));
        Ok(())
    }

    /// Decompress a Huffman file from `input` into `output`.
    pub fn decode<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        self.reset();

        let frequencies = FrequencyTable::read_from(&mut input)?;
        let byte_count = read_u32_be(&mut input, "code byte count")? as usize;
        let valid_bits = read_u8(&mut input, "final byte bit count")?;

        if byte_count == 0 {
            return Err(TrizipError::corrupt_header("code byte count is zero"));
        }
        if valid_bits > 7 {
            return Err(TrizipError::corrupt_header(format!(
                "final byte claims {valid_bits} valid bits"
            )));
        }

        let mut payload = Vec::with_capacity(byte_count);
        input.read_to_end(&mut payload)?;
        if payload.len() != byte_count {
            return Err(TrizipError::corrupt_header(format!(
                "header declares {byte_count} code bytes, found {}",
                payload.len()
            )));
        }

        let total_bits = (byte_count as u64 - 1) * 8 + valid_bits as u64;
        let tree = HuffmanTree::from_frequencies(&frequencies);
        let decoded = decode_payload(&tree, &payload, total_bits)?;

        if decoded.len() as u64 != frequencies.total() {
            return Err(TrizipError::corrupt_header(format!(
                "frequency table counts {} symbols, payload decodes to {}",
                frequencies.total(),
                decoded.len()
            )));
        }

        debug!(
            "huffman decode: {} payload bits, {} bytes out",
            total_bits,
            decoded.len()
        );

        output.write_all(&decoded)?;
        output.flush()?;

        self.last_tables = Some((frequencies, tree.code_table()));
        Ok(())
    }
}

/// Emit one code, bit 0 first.
fn write_code<W: Write>(writer: &mut BitWriter<W>, code: CodeEntry) -> Result<()> {
    if code.length <= 32 {
        writer.write_bits(code.bits as u32, code.length, BitOrder::LsbFirst)
    } else {
        writer.write_bits(code.bits as u32, 32, BitOrder::LsbFirst)?;
        writer.write_bits((code.bits >> 32) as u32, code.length - 32, BitOrder::LsbFirst)
    }
}

/// Walk the tree one bit at a time for exactly `total_bits` bits.
fn decode_payload(tree: &HuffmanTree, payload: &[u8], total_bits: u64) -> Result<Vec<u8>> {
    let Some(root) = tree.root() else {
        if total_bits > 0 {
            return Err(TrizipError::corrupt_header(
                "frequency table is empty but the payload is not",
            ));
        }
        return Ok(Vec::new());
    };

    let mut reader = BitReader::new(Cursor::new(payload));
    let mut output = Vec::with_capacity(payload.len() * 2);
    let mut node = root;

    for _ in 0..total_bits {
        let bit = reader.read_bit()?;
        let next = match node {
            HuffmanNode::Leaf { .. } => root,
            HuffmanNode::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
        };

        match next {
            // A lone leaf at the root consumes one bit per symbol.
            HuffmanNode::Leaf { symbol, .. } => {
                output.push(*symbol);
                node = root;
            }
            HuffmanNode::Internal { .. } => node = next,
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(TrizipError::corrupt_header(
            "payload ends in the middle of a code",
        ));
    }

    Ok(output)
}
