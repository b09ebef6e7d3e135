//! Error types for trizip operations.
//!
//! Every codec in the workspace reports failures through [`TrizipError`].
//! All variants are terminal for the encode/decode call that produced them;
//! no partial output is recovered.

use std::io;
use thiserror::Error;

/// The main error type for trizip operations.
#[derive(Debug, Error)]
pub enum TrizipError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended before a structurally required field was complete.
    #[error("Truncated input while reading {context}: expected {expected} more bytes")]
    TruncatedInput {
        /// Number of bytes that were still expected.
        expected: usize,
        /// What was being read when the stream ended.
        context: &'static str,
    },

    /// A header field is inconsistent with the rest of the stream.
    #[error("Corrupt header: {message}")]
    CorruptHeader {
        /// Description of the inconsistency.
        message: String,
    },

    /// The LZW decoder received a code it cannot have been sent.
    #[error("Protocol violation: code {code} (next assignable {next_code}): {message}")]
    ProtocolViolation {
        /// The offending code value.
        code: u32,
        /// The next code the decoder would have assigned.
        next_code: u32,
        /// Description of the violation.
        message: String,
    },

    /// Codec configuration outside the supported range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// Input longer than the 32-bit wire fields can describe.
    #[error("Input too large: {size} bytes exceeds the 32-bit format limit")]
    InputTooLarge {
        /// Size of the rejected input.
        size: u64,
    },
}

/// Result type alias for trizip operations.
pub type Result<T> = std::result::Result<T, TrizipError>;

impl TrizipError {
    /// Create a truncated input error.
    pub fn truncated(expected: usize, context: &'static str) -> Self {
        Self::TruncatedInput { expected, context }
    }

    /// Create a corrupt header error.
    pub fn corrupt_header(message: impl Into<String>) -> Self {
        Self::CorruptHeader {
            message: message.into(),
        }
    }

    /// Create a protocol violation error.
    pub fn protocol_violation(code: u32, next_code: u32, message: impl Into<String>) -> Self {
        Self::ProtocolViolation {
            code,
            next_code,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an input too large error.
    pub fn input_too_large(size: u64) -> Self {
        Self::InputTooLarge { size }
    }

    /// Whether this error means the stream ended early.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }
}
