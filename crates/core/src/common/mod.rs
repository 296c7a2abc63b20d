//! Common constants and error types shared by every layer of the crate.
//!
//! This module provides:
//! 1. **Constants:** binary16 field widths, masks, bias, and the special bit patterns.
//! 2. **Error Handling:** the few fallible edges (text parsing, configuration loading).

/// binary16 layout constants and special patterns.
pub mod constants;

/// Error types for parsing and configuration.
pub mod error;

pub use error::{ConfigError, ParseHalfError, ParseRoundingModeError};
