//! LZW configuration.

use trizip_core::error::{Result, TrizipError};

/// LZW configuration parameters.
///
/// Only the ceiling on the code width is configurable; the seed alphabet,
/// the reserved codes and the starting width are fixed by the file format.
/// Both sides of a stream must use the same `max_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Maximum code size in bits (9-24).
    pub max_bits: u8,
}

impl LzwConfig {
    /// Starting code width after every dictionary seed.
    pub const MIN_BITS: u8 = 9;

    /// Largest supported `max_bits`.
    pub const MAX_SUPPORTED_BITS: u8 = 24;

    /// Default configuration: codes grow up to 16 bits.
    pub const DEFAULT: Self = Self { max_bits: 16 };

    /// Create a configuration with the given width ceiling.
    ///
    /// The value is checked by [`validate`](Self::validate) when a codec is
    /// constructed.
    pub fn new(max_bits: u8) -> Self {
        Self { max_bits }
    }

    /// Reject widths the dictionary cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_BITS..=Self::MAX_SUPPORTED_BITS).contains(&self.max_bits) {
            return Err(TrizipError::invalid_config(format!(
                "LZW max bits must be in {}..={}, got {}",
                Self::MIN_BITS,
                Self::MAX_SUPPORTED_BITS,
                self.max_bits
            )));
        }
        Ok(())
    }

    /// Starting code width.
    pub fn min_bits(&self) -> u8 {
        Self::MIN_BITS
    }

    /// Code that resets the dictionary (256).
    pub fn clear_code(&self) -> u32 {
        256
    }

    /// Code that terminates the stream (257).
    pub fn end_code(&self) -> u32 {
        257
    }

    /// First code assigned to a learned string.
    pub fn first_code(&self) -> u32 {
        self.end_code() + 1
    }

    /// Assigned code at which the encoder emits CLEAR and reseeds.
    pub fn reset_threshold(&self) -> u32 {
        (1 << self.max_bits) - 1
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
