//! Command implementations for the trizip CLI.

pub mod codes;
pub mod compress;
pub mod decompress;

pub use codes::cmd_codes;
pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use test::cmd_test;

use crate::utils::{copy_mtime, open_input, open_output};
use clap::ValueEnum;
use log::debug;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use trizip_core::Result;
use trizip_huffman::HuffmanCodec;
use trizip_lzw::{LzwCodec, LzwConfig};
use trizip_rle::RleCodec;

/// Compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Static Huffman coding
    #[value(alias = "huf")]
    Huffman,
    /// Burrows-Wheeler transform + run-length coding
    Rle,
    /// Adaptive LZW
    Lzw,
}

impl Method {
    /// Every method, in the order `test` reports them.
    pub const ALL: [Method; 3] = [Method::Huffman, Method::Rle, Method::Lzw];

    /// Suffix appended to compressed file names.
    pub fn tag(self) -> &'static str {
        match self {
            Method::Lzw => "_lzw.opt_lzw",
            Method::Rle => "_rle.opt_rle",
            Method::Huffman => "_huf.opt_huf",
        }
    }

    /// Compress `input` into `output`.
    pub fn encode<R: Read, W: Write>(self, input: R, output: W, config: LzwConfig) -> Result<()> {
        match self {
            Method::Huffman => HuffmanCodec::new().encode(input, output),
            Method::Rle => RleCodec::new().encode(input, output),
            Method::Lzw => LzwCodec::new(config)?.encode(input, output),
        }
    }

    /// Decompress `input` into `output`.
    pub fn decode<R: Read, W: Write>(self, input: R, output: W, config: LzwConfig) -> Result<()> {
        match self {
            Method::Huffman => HuffmanCodec::new().decode(input, output),
            Method::Rle => RleCodec::new().decode(input, output),
            Method::Lzw => LzwCodec::new(config)?.decode(input, output),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Huffman => "huffman",
            Method::Rle => "rle",
            Method::Lzw => "lzw",
        };
        f.pad(name)
    }
}

/// LZW configuration from the `--max-bits` option.
pub fn lzw_config(max_bits: Option<u8>) -> LzwConfig {
    max_bits.map_or(LzwConfig::DEFAULT, LzwConfig::new)
}

/// Run `codec` from `input` into a new file at `output`.
///
/// The output inherits the input's modification time. A partly written
/// output is removed when the codec fails.
pub fn transcode<F>(
    input: &Path,
    output: &Path,
    overwrite: bool,
    codec: F,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut BufReader<File>, &mut BufWriter<File>) -> Result<()>,
{
    let mut reader = open_input(input)?;
    let mut writer = open_output(output, overwrite)?;

    let result = codec(&mut reader, &mut writer)
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|()| writer.flush().map_err(Into::into));
    drop(writer);

    if let Err(e) = result {
        debug!("removing partial output {}", output.display());
        let _ = fs::remove_file(output);
        return Err(e);
    }

    copy_mtime(input, output)?;
    Ok(())
}
