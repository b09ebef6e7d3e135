//! LZW decoder (decompression).
//!
//! The code width is never transmitted; the decoder mirrors the encoder's
//! dictionary growth one assignment behind and derives the width of each
//! code from that.

use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use log::{debug, trace};
use std::io::{BufReader, Read, Write};
use trizip_core::bitstream::{BitOrder, BitReader};
use trizip_core::error::{Result, TrizipError};

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dict: LzwDictionary::new(config),
        })
    }

    /// Decode a code stream from `input` into `output`, stopping at END.
    ///
    /// # Errors
    ///
    /// - [`TrizipError::TruncatedInput`] if the stream ends before END
    /// - [`TrizipError::ProtocolViolation`] for a code that is neither
    ///   assigned nor the next one to be assigned
    pub fn decode<R: Read, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        self.dict.reset();
        let clear_code = self.dict.config().clear_code();
        let end_code = self.dict.config().end_code();

        let mut reader = BitReader::new(BufReader::new(input));
        let mut previous: Option<Vec<u8>> = None;
        let mut output_len = 0u64;

        loop {
            let mut code = self.read_code(&mut reader)?;

            if code == clear_code {
                trace!("lzw decoder reset at code {}", self.dict.last_code());
                self.dict.reset();
                previous = None;
                code = self.read_code(&mut reader)?;
            }

            if code == end_code {
                break;
            }

            let known = self.dict.get_string(code).map(<[u8]>::to_vec);
            let current = match (known, previous.take()) {
                // First code after a seed: plain lookup, nothing to learn.
                (Some(current), None) => current,
                (Some(current), Some(mut prev)) => {
                    prev.push(current[0]);
                    self.dict.add_string_decode(prev);
                    current
                }
                // Code defined by this very step: previous string plus its
                // own first byte.
                (None, Some(mut prev)) if code == self.dict.next_code() => {
                    prev.push(prev[0]);
                    self.dict.add_string_decode(prev.clone());
                    prev
                }
                (None, prev) => {
                    return Err(TrizipError::protocol_violation(
                        code,
                        self.dict.next_code(),
                        if prev.is_some() {
                            "code is not yet assigned"
                        } else {
                            "code after a dictionary seed must be a literal"
                        },
                    ));
                }
            };

            output.write_all(&current)?;
            output_len += current.len() as u64;
            previous = Some(current);
        }

        output.flush()?;
        debug!(
            "lzw decode: {} bits, {} bytes out",
            reader.bits_read(),
            output_len
        );
        Ok(())
    }

    fn read_code<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u32> {
        reader.read_bits(self.dict.read_width(), BitOrder::MsbFirst)
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
