//! Block run-length coding.
//!
//! The stream is a sequence of records, each introduced by one length byte:
//!
//! ```text
//! 0nnnnnnn  b1 .. bn    literal chunk: n (1-127) raw bytes follow
//! 1nnnnnnn  c           repeat chunk: byte c repeated n (1-127) times
//! ```
//!
//! Maximal runs of two or more equal bytes become repeat chunks; everything
//! between them becomes literal chunks. A long run is split into full chunks
//! of 127, each written with the length byte [`MAX_REPEAT`] (`0xFF`), plus one
//! chunk for the remainder.

use trizip_core::error::{Result, TrizipError};

/// Flag bit marking a repeat record.
pub const REPEAT_FLAG: u8 = 0x80;

/// Largest count a length byte can carry.
pub const MAX_CHUNK: usize = 0x7F;

/// Length byte of a full literal chunk.
pub const MAX_NO_REPEAT: u8 = 0x7F;

/// Length byte of a full repeat chunk.
pub const MAX_REPEAT: u8 = 0xFF;

/// A maximal run of at least two identical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Offset of the first byte of the run.
    pub start: usize,
    /// Run length, at least 2.
    pub length: usize,
    /// Repeated byte.
    pub symbol: u8,
}

impl Block {
    /// Offset one past the last byte of the run.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Find every maximal run of two or more equal bytes, left to right.
pub fn find_blocks(data: &[u8]) -> Vec<Block> {
    data.chunk_by(|a, b| a == b)
        .scan(0, |offset, run| {
            let start = *offset;
            *offset += run.len();
            Some((start, run))
        })
        .filter(|(_, run)| run.len() > 1)
        .map(|(start, run)| Block {
            start,
            length: run.len(),
            symbol: run[0],
        })
        .collect()
}

/// Encode `data` as a record stream appended to `output`.
pub fn encode_blocks(data: &[u8], output: &mut Vec<u8>) {
    let mut cursor = 0;
    for block in find_blocks(data) {
        write_literal(&data[cursor..block.start], output);
        write_repeat(block.length, block.symbol, output);
        cursor = block.end();
    }
    write_literal(&data[cursor..], output);
}

fn write_literal(span: &[u8], output: &mut Vec<u8>) {
    for chunk in span.chunks(MAX_CHUNK) {
        output.push(chunk.len() as u8);
        output.extend_from_slice(chunk);
    }
}

fn write_repeat(length: usize, symbol: u8, output: &mut Vec<u8>) {
    for _ in 0..length / MAX_CHUNK {
        output.extend_from_slice(&[MAX_REPEAT, symbol]);
    }
    let remainder = length % MAX_CHUNK;
    if remainder > 0 {
        output.extend_from_slice(&[REPEAT_FLAG | remainder as u8, symbol]);
    }
}

/// Decode a complete record stream.
///
/// A literal record whose bytes run past the end, or a repeat record missing
/// its symbol, fails with `TruncatedInput`.
pub fn decode_blocks(stream: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(stream.len() * 2);
    let mut pos = 0;

    while let Some(&header) = stream.get(pos) {
        pos += 1;
        let count = (header & !REPEAT_FLAG) as usize;

        if header & REPEAT_FLAG != 0 {
            let &symbol = stream
                .get(pos)
                .ok_or_else(|| TrizipError::truncated(1, "repeat record symbol"))?;
            pos += 1;
            output.extend(std::iter::repeat_n(symbol, count));
        } else {
            let available = stream.len() - pos;
            if available < count {
                return Err(TrizipError::truncated(
                    count - available,
                    "literal record bytes",
                ));
            }
            output.extend_from_slice(&stream[pos..pos + count]);
            pos += count;
        }
    }

    Ok(output)
}
