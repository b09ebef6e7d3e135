//! Bit-level I/O shared by the Huffman and LZW codecs.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! data at the bit level. No other part of the workspace touches bit or byte
//! cursors directly.
//!
//! # Bit Ordering
//!
//! Bits are always packed LSB-first within a byte: the first bit written
//! lands in bit 0 of the output byte, the eighth in bit 7.
//!
//! A multi-bit field can be emitted in either order, selected by [`BitOrder`]:
//!
//! - [`BitOrder::LsbFirst`]: bit 0 of the field is written first (Huffman
//!   codes, whose bit `i` is the branch taken at depth `i`).
//! - [`BitOrder::MsbFirst`]: the most significant bit of the field is written
//!   first (LZW codes).
//!
//! # Example
//!
//! ```
//! use trizip_core::bitstream::{BitOrder, BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3, BitOrder::LsbFirst).unwrap();
//!     writer.write_bits(0x1AB, 9, BitOrder::MsbFirst).unwrap();
//!     writer.finish().unwrap();
//! }
//!
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3, BitOrder::LsbFirst).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(9, BitOrder::MsbFirst).unwrap(), 0x1AB);
//! ```

use crate::error::{Result, TrizipError};
use std::io::{ErrorKind, Read, Write};

/// Order in which the bits of a multi-bit field enter the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Least significant bit of the field first.
    #[default]
    LsbFirst,
    /// Most significant bit of the field first.
    MsbFirst,
}

/// Reverse the low `count` bits of `value`.
#[inline]
fn reverse_low_bits(value: u32, count: u8) -> u32 {
    debug_assert!((1..=32).contains(&count));
    value.reverse_bits() >> (32 - count as u32)
}

/// A bit-level reader that wraps any `Read` implementation.
///
/// The reader only pulls as many bytes from the underlying stream as the
/// requested bits require, so trailing data after the last field is never
/// consumed.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer (LSB-first).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Ensure at least `count` bits are available in the buffer.
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        debug_assert!(count <= 56, "Cannot fill more than 56 bits at once");

        while self.bits_in_buffer < count {
            let bits_needed = count - self.bits_in_buffer;
            let bytes_needed = bits_needed.div_ceil(8) as usize;

            let mut temp_buf = [0u8; 8];
            let n = match self.reader.read(&mut temp_buf[..bytes_needed]) {
                Ok(0) => return Err(TrizipError::truncated(bytes_needed, "bit stream")),
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            for byte in temp_buf.iter().take(n) {
                self.buffer |= (*byte as u64) << self.bits_in_buffer;
                self.bits_in_buffer += 8;
            }
        }

        Ok(())
    }

    /// Read up to 32 bits from the stream.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of bits to read (0-32)
    /// * `order` - Order in which the field's bits were written
    ///
    /// # Errors
    ///
    /// Returns [`TrizipError::TruncatedInput`] if the stream ends first.
    pub fn read_bits(&mut self, count: u8, order: BitOrder) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        if count == 0 {
            return Ok(0);
        }

        self.fill_buffer(count)?;

        let mask = (1u64 << count).wrapping_sub(1);
        let raw = (self.buffer & mask) as u32;

        self.buffer >>= count;
        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(match order {
            BitOrder::LsbFirst => raw,
            BitOrder::MsbFirst => reverse_low_bits(raw, count),
        })
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1, BitOrder::LsbFirst)? != 0)
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits in an internal buffer and emits each byte as
/// soon as it is complete. Call [`BitWriter::finish`] when done so the final
/// partial byte is flushed exactly once.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer (LSB-first).
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Number of bits sitting in the current, not yet emitted, byte (0-7).
    pub fn pending_bits(&self) -> u8 {
        self.bits_in_buffer
    }

    /// Write complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        if self.bits_in_buffer >= 32 {
            let bytes = (self.buffer as u32).to_le_bytes();
            self.writer.write_all(&bytes)?;
            self.buffer >>= 32;
            self.bits_in_buffer -= 32;
        }

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer & 0xFF) as u8;
            self.writer.write_all(&[byte])?;
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }
        Ok(())
    }

    /// Write up to 32 bits to the stream.
    ///
    /// # Arguments
    ///
    /// * `value` - The field to write; bits above `count` are ignored
    /// * `count` - Number of bits to write (0-32)
    /// * `order` - Which end of the field enters the stream first
    pub fn write_bits(&mut self, value: u32, count: u8, order: BitOrder) -> Result<()> {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        if count == 0 {
            return Ok(());
        }

        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count).wrapping_sub(1)
        };
        let value = match order {
            BitOrder::LsbFirst => value & mask,
            BitOrder::MsbFirst => reverse_low_bits(value & mask, count),
        };

        self.buffer |= (value as u64) << self.bits_in_buffer;
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buffer |= (bit as u64) << self.bits_in_buffer;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer >= 8 {
            self.flush_bytes()?;
        }

        Ok(())
    }

    /// Write `count` zero bits.
    ///
    /// Used to left-pad a code to the current code width.
    pub fn write_zeros(&mut self, mut count: u32) -> Result<()> {
        while count > 0 {
            let chunk = count.min(32) as u8;
            self.bits_in_buffer += chunk;
            self.total_bits_written += chunk as u64;
            self.flush_bytes()?;
            count -= chunk as u32;
        }
        Ok(())
    }

    /// Pad the current byte with zeros and emit it, if one is pending.
    pub fn align_to_byte(&mut self) -> Result<()> {
        if self.bits_in_buffer % 8 != 0 {
            let padding = 8 - (self.bits_in_buffer % 8);
            self.write_zeros(padding as u32)?;
        }
        Ok(())
    }

    /// Flush the final partial byte and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.align_to_byte()?;
        self.flush_bytes()?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
