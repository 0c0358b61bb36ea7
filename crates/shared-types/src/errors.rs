//! Shared type error definitions.

use thiserror::Error;

/// Errors from parsing a hash out of its display-hex form.
#[derive(Debug, Error)]
pub enum HashParseError {
    /// The decoded byte length was not the hash size
    #[error("Invalid hash length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The string was not valid hex
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
