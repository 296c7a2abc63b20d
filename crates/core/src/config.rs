//! Configuration for the multiplier and its diagnostics.
//!
//! Every field is optional in JSON and falls back to the value used by
//! [`Config::default()`], so `{}` is a complete configuration.
//!
//! ```json
//! {
//!     "rounding": "rtz",
//!     "trace": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::codec::RoundingMode;
use crate::common::ConfigError;

/// Root configuration.
///
/// # Examples
///
/// ```
/// use halfmul_core::{Config, RoundingMode};
///
/// let config = Config::from_json(r#"{ "rounding": "RTZ" }"#).unwrap();
/// assert_eq!(config.rounding, RoundingMode::Rtz);
/// assert!(!config.trace);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Rounding applied when the multiplier narrows a generic product.
    #[serde(default)]
    pub rounding: RoundingMode,

    /// Report intermediate values of every multiplication through `tracing`.
    #[serde(default)]
    pub trace: bool,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON or names an
    /// unknown rounding mode.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}
