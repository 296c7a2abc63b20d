//! Rounding applied when a wide real is narrowed to a binary16 fraction.
//!
//! Two modes are supported, using the RISC-V `frm` encodings:
//!
//! | Value | Mode | Description                      |
//! |-------|------|----------------------------------|
//! | 0b000 | RNE  | Round to Nearest, ties to Even   |
//! | 0b001 | RTZ  | Round towards Zero (truncation)  |
//!
//! [`encode`](super::encode) always truncates. The multiplier defaults to RNE.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ParseRoundingModeError;

/// Rounding mode encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    #[default]
    #[serde(alias = "RNE", alias = "Rne")]
    Rne = 0b000,
    /// Round towards Zero.
    #[serde(alias = "RTZ", alias = "Rtz")]
    Rtz = 0b001,
}

impl RoundingMode {
    /// Decodes a 3-bit rounding mode field.
    ///
    /// Returns `None` for every encoding other than RNE and RTZ, including the
    /// directed modes this crate does not implement and the dynamic sentinel.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::Rne),
            0b001 => Some(Self::Rtz),
            _ => None,
        }
    }

    /// Rounds a non-negative scaled magnitude to an integer.
    ///
    /// `scaled` is the magnitude already multiplied so that one unit in the
    /// last place of the target fraction equals 1.0. The conversion saturates
    /// at `u64::MAX`, far above any value the codec produces.
    ///
    /// # Arguments
    ///
    /// * `scaled` - Non-negative, finite scaled magnitude.
    ///
    /// # Returns
    ///
    /// The integer fraction, which may equal the field's capacity (1024) when
    /// RNE rounds up; callers carry that into the exponent.
    #[inline]
    pub fn round(self, scaled: f64) -> u64 {
        debug_assert!(scaled >= 0.0 && scaled.is_finite());
        match self {
            Self::Rne => scaled.round_ties_even() as u64,
            Self::Rtz => scaled.trunc() as u64,
        }
    }

    /// Short lower-case mnemonic.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rne => "rne",
            Self::Rtz => "rtz",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = ParseRoundingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rne" | "nearest" | "nearest-even" => Ok(Self::Rne),
            "rtz" | "zero" | "truncate" => Ok(Self::Rtz),
            _ => Err(ParseRoundingModeError(s.to_owned())),
        }
    }
}
