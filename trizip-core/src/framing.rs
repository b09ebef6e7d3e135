//! Byte-aligned framing helpers.
//!
//! All length and count fields in trizip files are big-endian 32-bit
//! integers. A stream that ends inside a field is reported as
//! [`TrizipError::TruncatedInput`] rather than a raw I/O error.

use crate::error::{Result, TrizipError};
use std::io::{ErrorKind, Read, Write};

/// Read exactly `buf.len()` bytes, mapping a short read to `TruncatedInput`.
pub fn read_exact_or_truncated<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    context: &'static str,
) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(TrizipError::truncated(buf.len() - filled, context)),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Read a single byte.
pub fn read_u8<R: Read>(reader: &mut R, context: &'static str) -> Result<u8> {
    let mut buf = [0u8; 1];
    read_exact_or_truncated(reader, &mut buf, context)?;
    Ok(buf[0])
}

/// Read a big-endian `u32`.
pub fn read_u32_be<R: Read>(reader: &mut R, context: &'static str) -> Result<u32> {
    let mut buf = [0u8; 4];
    read_exact_or_truncated(reader, &mut buf, context)?;
    Ok(u32::from_be_bytes(buf))
}

/// Write a big-endian `u32`.
pub fn write_u32_be<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    writer.write_all(&value.to_be_bytes())?;
    Ok(())
}

/// Convert an input length to the 32-bit wire representation.
pub fn checked_u32_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| TrizipError::input_too_large(len as u64))
}
