//! RLE file encoder and decoder.
//!
//! # File Layout
//!
//! ```text
//! ┌──────────────────┬──────────────────────────────┐
//! │ u32 BE BWT index │ block records (to EOF)       │
//! └──────────────────┴──────────────────────────────┘
//! ```

use crate::block::{decode_blocks, encode_blocks};
use crate::bwt;
use log::debug;
use std::io::{Read, Write};
use trizip_core::error::Result;
use trizip_core::framing::{read_u32_be, write_u32_be};

/// Size of the fixed header.
pub const INDEX_BYTES: usize = 4;

/// BWT + block RLE codec.
///
/// The whole input is held in memory; the transform works on a doubled copy.
#[derive(Debug, Default)]
pub struct RleCodec {
    last_index: Option<u32>,
}

impl RleCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// BWT index written or read by the most recent call.
    pub fn last_index(&self) -> Option<u32> {
        self.last_index
    }

    /// Forget the state of the previous call.
    pub fn reset(&mut self) {
        self.last_index = None;
    }

    /// Compress everything readable from `input` into `output`.
    pub fn encode<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        self.reset();

        let mut data = Vec::new();
        input.read_to_end(&mut data)?;

        let (transformed, index) = bwt::forward(&data)?;
        let mut records = Vec::with_capacity(transformed.len() / 2 + 1);
        encode_blocks(&transformed, &mut records);

        debug!(
            "rle encode: {} bytes, BWT index {}, {} record bytes",
            data.len(),
            index,
            records.len()
        );

        write_u32_be(&mut output, index)?;
        output.write_all(&records)?;
        output.flush()?;

        self.last_index = Some(index);
        Ok(())
    }

    /// Decompress an RLE file from `input` into `output`.
    pub fn decode<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        self.reset();

        let index = read_u32_be(&mut input, "BWT index")?;
        let mut records = Vec::new();
        input.read_to_end(&mut records)?;

        let transformed = decode_blocks(&records)?;
        let data = bwt::inverse(&transformed, index)?;

        debug!(
            "rle decode: {} record bytes, BWT index {}, {} bytes out",
            records.len(),
            index,
            data.len()
        );

        output.write_all(&data)?;
        output.flush()?;

        self.last_index = Some(index);
        Ok(())
    }
}
