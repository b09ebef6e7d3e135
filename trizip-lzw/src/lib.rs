//! # trizip-lzw: Adaptive LZW Compression
//!
//! Lempel-Ziv-Welch compression with a code width that grows as the
//! dictionary fills and a dictionary that reseeds itself before it
//! overflows the configured ceiling.
//!
//! ## Stream Format
//!
//! - **No header**: the stream is nothing but codes
//! - **MSB-first codes, LSB-first bytes**: each code's most significant bit
//!   enters the stream first; bits fill each byte from bit 0 upwards
//! - **9 bits to start**: the width grows by one bit whenever the newly
//!   assigned code equals `2^width`
//! - **CLEAR (256)** opens every stream and marks every reseed
//! - **END (257)** terminates the stream; the final byte is zero-padded
//!
//! ## Example
//!
//! ```rust
//! use trizip_lzw::{LzwConfig, compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(original, LzwConfig::DEFAULT).unwrap();
//! let decompressed = decompress(&compressed, LzwConfig::DEFAULT).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;

pub use config::LzwConfig;
pub use decoder::LzwDecoder;
pub use dictionary::LzwDictionary;
pub use encoder::LzwEncoder;
pub use trizip_core::{Result, TrizipError};

use std::io::{Read, Write};

/// LZW codec holding one encoder and one decoder for a configuration.
///
/// Every `encode` and `decode` starts from a freshly seeded dictionary, so
/// reusing an instance gives the same bytes as using a new one.
#[derive(Debug)]
pub struct LzwCodec {
    config: LzwConfig,
    encoder: LzwEncoder,
    decoder: LzwDecoder,
}

impl LzwCodec {
    /// Create a codec, rejecting an out-of-range configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        Ok(Self {
            config,
            encoder: LzwEncoder::new(config)?,
            decoder: LzwDecoder::new(config)?,
        })
    }

    /// The configuration this codec was built with.
    pub fn config(&self) -> LzwConfig {
        self.config
    }

    /// Compress everything readable from `input` into `output`.
    pub fn encode<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        self.encoder.encode(input, output)
    }

    /// Decompress a code stream from `input` into `output`.
    pub fn decode<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        self.decoder.decode(input, output)
    }

    /// Return both dictionaries to their seed state.
    pub fn reset(&mut self) {
        self.encoder.reset();
        self.decoder.reset();
    }
}

/// Compress data with LZW using the given configuration.
///
/// # Example
///
/// ```rust
/// use trizip_lzw::{compress, LzwConfig};
///
/// let data = b"ABABABABABABABABABABABABABABAB";
/// let compressed = compress(data, LzwConfig::DEFAULT).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(data.len() / 2 + 4);
    LzwEncoder::new(config)?.encode(data, &mut output)?;
    Ok(output)
}

/// Decompress LZW data produced with the same configuration.
pub fn decompress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(data.len() * 2);
    LzwDecoder::new(config)?.decode(data, &mut output)?;
    Ok(output)
}
