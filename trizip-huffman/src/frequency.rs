//! Per-symbol occurrence counts.

use std::io::{Read, Write};
use trizip_core::error::{Result, TrizipError};
use trizip_core::framing::{read_exact_or_truncated, write_u32_be};

/// Number of distinct byte symbols.
pub const SYMBOL_COUNT: usize = 256;

/// Serialized size of a frequency table (256 big-endian u32 counters).
pub const FREQUENCY_TABLE_BYTES: usize = SYMBOL_COUNT * 4;

/// Occurrence count of every byte value over one input.
///
/// The sum of all counters equals the number of bytes counted. A table is
/// built once per encode and read back verbatim from the header on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; SYMBOL_COUNT],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Create an all-zero table.
    pub fn new() -> Self {
        Self {
            counts: [0; SYMBOL_COUNT],
        }
    }

    /// Count every byte of `data` in a single pass.
    ///
    /// # Errors
    ///
    /// Fails with [`TrizipError::InputTooLarge`] when `data` is longer than a
    /// 32-bit counter can describe.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if u32::try_from(data.len()).is_err() {
            return Err(TrizipError::input_too_large(data.len() as u64));
        }

        let mut table = Self::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        Ok(table)
    }

    /// Build a table from raw counters.
    pub fn from_counts(counts: [u32; SYMBOL_COUNT]) -> Self {
        Self { counts }
    }

    /// Count of one symbol.
    pub fn get(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    /// All counters, indexed by symbol value.
    pub fn counts(&self) -> &[u32; SYMBOL_COUNT] {
        &self.counts
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Number of symbols with a nonzero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate over `(symbol, count)` for every symbol that occurs.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }

    /// Write the 1024-byte header form (symbol order 0..255, big-endian).
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for &count in &self.counts {
            write_u32_be(writer, count)?;
        }
        Ok(())
    }

    /// Read the 1024-byte header form.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut raw = [0u8; FREQUENCY_TABLE_BYTES];
        read_exact_or_truncated(reader, &mut raw, "frequency table")?;

        let mut counts = [0u32; SYMBOL_COUNT];
        for (count, chunk) in counts.iter_mut().zip(raw.chunks_exact(4)) {
            *count = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(Self { counts })
    }
}
