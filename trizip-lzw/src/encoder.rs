//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use log::{debug, trace};
use std::io::{BufReader, Read, Write};
use trizip_core::bitstream::{BitOrder, BitWriter};
use trizip_core::error::{Result, TrizipError};

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for string lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dict: LzwDictionary::new(config),
        })
    }

    /// Encode everything readable from `input` into `output`.
    ///
    /// # Algorithm
    ///
    /// 1. Seed the dictionary and emit CLEAR
    /// 2. Extend the working string while it stays in the dictionary
    /// 3. On a miss, emit the working string's code, learn the extended
    ///    string and restart from the byte that missed
    /// 4. When the learned code reaches the configured ceiling, emit CLEAR
    ///    and reseed
    /// 5. Emit the pending string and END, then pad the final byte with zeros
    pub fn encode<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        self.dict.reset();
        let clear_code = self.dict.config().clear_code();
        let end_code = self.dict.config().end_code();

        let mut writer = BitWriter::new(output);
        let mut input_len = 0u64;
        let mut codes = 1u64;
        let mut resets = 0u32;

        writer.write_bits(clear_code, self.dict.width(), BitOrder::MsbFirst)?;

        let mut current: Vec<u8> = Vec::new();
        for byte in BufReader::new(input).bytes() {
            let byte = byte?;
            input_len += 1;

            current.push(byte);
            if self.dict.find_code(&current).is_some() {
                continue;
            }

            // `current` minus its last byte is known; `current` itself is new.
            let learned = std::mem::replace(&mut current, vec![byte]);
            let code = self.code_of(&learned[..learned.len() - 1])?;
            writer.write_bits(code, self.dict.width(), BitOrder::MsbFirst)?;
            codes += 1;
            self.dict.add_string(learned);

            if self.dict.needs_reset() {
                trace!("lzw encoder reset at code {}", self.dict.last_code());
                writer.write_bits(clear_code, self.dict.width(), BitOrder::MsbFirst)?;
                codes += 1;
                resets += 1;
                self.dict.reset();
            }
        }

        if !current.is_empty() {
            let code = self.code_of(&current)?;
            writer.write_bits(code, self.dict.width(), BitOrder::MsbFirst)?;
            codes += 1;
        }

        // No entry follows the final code, so END goes out at the width the
        // decoder, one assignment behind, will expect.
        writer.write_bits(end_code, self.dict.read_width(), BitOrder::MsbFirst)?;
        codes += 1;

        let bits = writer.bits_written();
        writer.finish()?;

        debug!(
            "lzw encode: {} bytes, {} codes, {} bits, {} resets",
            input_len, codes, bits, resets
        );
        Ok(())
    }

    fn code_of(&self, string: &[u8]) -> Result<u32> {
        self.dict.find_code(string).ok_or_else(|| {
            TrizipError::protocol_violation(
                0,
                self.dict.next_code(),
                format!("working string of {} bytes has no code", string.len()),
            )
        })
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
