//! binary16 field layout and value classification.
//!
//! This module is the only place that inspects raw exponent and fraction
//! fields. It provides:
//! 1. **Fields:** lossless split of a 16-bit pattern into sign, exponent, and fraction.
//! 2. **Classification:** [`classify`] maps every pattern to exactly one [`Category`].
//! 3. **Value Type:** [`Half`], a transparent wrapper over the raw pattern.
//!
//! Both the codec and the multiplier dispatch on [`Category`], so the bit-field
//! rules live here once.

/// The `Half` value type.
pub mod half;

pub use half::Half;

use std::fmt;

use crate::common::constants::{
    EXPONENT_MASK, EXPONENT_SPECIAL, FRACTION_BITS, FRACTION_MASK, SIGN_MASK,
};

/// The three sub-fields of a binary16 pattern, most significant first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fields {
    /// Sign bit: 0 for positive, 1 for negative.
    pub sign: u8,
    /// Biased exponent, 0..=31.
    pub exponent: u8,
    /// Fraction, 0..=1023.
    pub fraction: u16,
}

impl Fields {
    /// Splits a raw pattern into its fields.
    ///
    /// # Arguments
    ///
    /// * `bits` - Any 16-bit pattern.
    ///
    /// # Returns
    ///
    /// The sign, biased exponent, and fraction of `bits`.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            sign: (bits >> 15) as u8,
            exponent: ((bits & EXPONENT_MASK) >> FRACTION_BITS) as u8,
            fraction: bits & FRACTION_MASK,
        }
    }

    /// Packs the fields back into a pattern.
    ///
    /// Each field is masked to its width, so out-of-range values cannot leak
    /// into neighbouring fields.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        (((self.sign & 1) as u16) << 15)
            | (((self.exponent & EXPONENT_SPECIAL) as u16) << FRACTION_BITS)
            | (self.fraction & FRACTION_MASK)
    }
}

/// Value category of a binary16 pattern.
///
/// Derived from the fields on demand, never stored. NaN carries no sign or
/// payload because neither is meaningful to this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Exponent 0, fraction 0.
    Zero {
        /// Sign bit was set.
        negative: bool,
    },
    /// Exponent 0, fraction non-zero: `±2^-14 × fraction/1024`.
    Subnormal {
        /// Sign bit was set.
        negative: bool,
        /// Fraction field, 1..=1023.
        fraction: u16,
    },
    /// Exponent 1..=30: `±2^(exponent-15) × (1 + fraction/1024)`.
    Normal {
        /// Sign bit was set.
        negative: bool,
        /// Biased exponent field, 1..=30.
        exponent: u8,
        /// Fraction field, 0..=1023.
        fraction: u16,
    },
    /// Exponent 31, fraction 0.
    Infinity {
        /// Sign bit was set.
        negative: bool,
    },
    /// Exponent 31, fraction non-zero.
    Nan,
}

impl Category {
    /// Returns true for [`Category::Zero`].
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero { .. })
    }

    /// Returns true for [`Category::Infinity`].
    #[inline]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinity { .. })
    }

    /// Returns true for [`Category::Nan`].
    #[inline]
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::Nan)
    }

    /// Returns true for zero, subnormal, and normal values.
    #[inline]
    pub const fn is_finite(self) -> bool {
        matches!(
            self,
            Self::Zero { .. } | Self::Subnormal { .. } | Self::Normal { .. }
        )
    }

    /// Sign of the value, or `None` for NaN.
    #[inline]
    pub const fn is_negative(self) -> Option<bool> {
        match self {
            Self::Zero { negative }
            | Self::Subnormal { negative, .. }
            | Self::Normal { negative, .. }
            | Self::Infinity { negative } => Some(negative),
            Self::Nan => None,
        }
    }

    /// Lower-case category name, as printed by diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero { .. } => "zero",
            Self::Subnormal { .. } => "subnormal",
            Self::Normal { .. } => "normal",
            Self::Infinity { .. } => "infinity",
            Self::Nan => "nan",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a raw pattern.
///
/// Total over all 2^16 patterns; each maps to exactly one category.
///
/// # Examples
///
/// ```
/// use halfmul_core::{classify, Category};
///
/// assert_eq!(classify(0x8000), Category::Zero { negative: true });
/// assert_eq!(classify(0x7C00), Category::Infinity { negative: false });
/// assert_eq!(classify(0xFE00), Category::Nan);
/// assert_eq!(
///     classify(0x4689),
///     Category::Normal { negative: false, exponent: 17, fraction: 0x289 }
/// );
/// ```
#[inline]
pub const fn classify(bits: u16) -> Category {
    let fields = Fields::from_bits(bits);
    let negative = bits & SIGN_MASK != 0;

    match (fields.exponent, fields.fraction) {
        (0, 0) => Category::Zero { negative },
        (0, fraction) => Category::Subnormal { negative, fraction },
        (EXPONENT_SPECIAL, 0) => Category::Infinity { negative },
        (EXPONENT_SPECIAL, _) => Category::Nan,
        (exponent, fraction) => Category::Normal {
            negative,
            exponent,
            fraction,
        },
    }
}
