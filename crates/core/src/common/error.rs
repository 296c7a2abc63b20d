//! Error definitions.
//!
//! The numeric core (classification, decode, encode, multiply) is total and has
//! no error paths. Errors only arise at the edges:
//! 1. **Text Parsing:** turning user-supplied literals into bit patterns or rounding modes.
//! 2. **Configuration:** reading and deserializing a JSON configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to parse a textual bit pattern into a [`Half`](crate::Half).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseHalfError {
    /// The input was empty (or only a radix prefix).
    #[error("empty bit pattern")]
    Empty,

    /// The input contained a character that is not a digit in its radix.
    #[error("invalid digit in bit pattern `{0}`")]
    InvalidDigit(String),

    /// The input is a valid number but does not fit in 16 bits.
    #[error("bit pattern `{0}` does not fit in 16 bits")]
    OutOfRange(String),
}

/// Failure to parse a rounding mode name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown rounding mode `{0}` (expected `rne` or `rtz`)")]
pub struct ParseRoundingModeError(pub String);

/// Failure to load a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file `{}`: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::Config).
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
