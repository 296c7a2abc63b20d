//! Half-precision value type.
//!
//! [`Half`] is a transparent wrapper around the raw 16-bit pattern. It adds no
//! semantics of its own: conversions go through the codec and `*` goes through
//! the multiplier with its default configuration.

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use crate::codec::{decode, encode};
use crate::common::ParseHalfError;
use crate::common::constants::{CANONICAL_NAN, SIGN_MASK};
use crate::format::{Category, Fields, classify};
use crate::mul::multiply;

/// An immutable binary16 bit pattern.
///
/// Equality is bitwise: `+0` and `-0` compare unequal, and NaN patterns with
/// different payloads are different values. Use [`Half::to_f64`] for numeric
/// comparison.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    /// Positive zero.
    pub const ZERO: Self = Self(0x0000);
    /// Negative zero.
    pub const NEG_ZERO: Self = Self(0x8000);
    /// One.
    pub const ONE: Self = Self(0x3C00);
    /// Positive infinity.
    pub const INFINITY: Self = Self(0x7C00);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(0xFC00);
    /// Canonical NaN.
    pub const NAN: Self = Self(CANONICAL_NAN);
    /// Largest finite value, 65504.
    pub const MAX: Self = Self(0x7BFF);

    /// Wraps a raw pattern.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw pattern.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Splits the pattern into sign, exponent, and fraction.
    #[inline]
    pub const fn fields(self) -> Fields {
        Fields::from_bits(self.0)
    }

    /// Value category of the pattern.
    #[inline]
    pub const fn category(self) -> Category {
        classify(self.0)
    }

    /// Decodes to a wide real.
    #[inline]
    pub fn to_f64(self) -> f64 {
        decode(self.0)
    }

    /// Encodes a wide real, truncating toward zero.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self(encode(value))
    }

    /// Returns true if the pattern is NaN.
    #[inline]
    pub const fn is_nan(self) -> bool {
        self.category().is_nan()
    }

    /// Returns true if the pattern is an infinity.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.category().is_infinite()
    }

    /// Returns true if the sign bit is set (including `-0` and NaN patterns).
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }
}

impl From<u16> for Half {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<Half> for u16 {
    fn from(half: Half) -> Self {
        half.0
    }
}

impl From<Half> for f64 {
    fn from(half: Half) -> Self {
        half.to_f64()
    }
}

impl Mul for Half {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(multiply(self.0, rhs.0))
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({:#06x})", self.0)
    }
}

/// Renders the diagnostic form: `0x4689 = 6.5351562500 (sign=0, exp=17, frac=0x289)`.
impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields();
        write!(
            f,
            "{:#06x} = {:.10} (sign={}, exp={}, frac={:#05x})",
            self.0,
            self.to_f64(),
            fields.sign,
            fields.exponent,
            fields.fraction
        )
    }
}

impl fmt::LowerHex for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Parses a bit-pattern literal.
///
/// Accepts `0x`/`0X` hexadecimal, `0b`/`0B` binary, or bare hexadecimal.
/// Underscores between digits are ignored.
///
/// # Examples
///
/// ```
/// use halfmul_core::Half;
///
/// assert_eq!("0x4689".parse::<Half>().unwrap().to_bits(), 0x4689);
/// assert_eq!("7c01".parse::<Half>().unwrap().to_bits(), 0x7C01);
/// assert_eq!("0b0_11110_0000000000".parse::<Half>().unwrap().to_bits(), 0x7800);
/// ```
impl FromStr for Half {
    type Err = ParseHalfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (radix, digits) = if let Some(rest) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            (16, rest)
        } else if let Some(rest) = trimmed
            .strip_prefix("0b")
            .or_else(|| trimmed.strip_prefix("0B"))
        {
            (2, rest)
        } else {
            (16, trimmed)
        };

        let digits: String = digits.chars().filter(|&c| c != '_').collect();
        if digits.is_empty() {
            return Err(ParseHalfError::Empty);
        }
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(ParseHalfError::InvalidDigit(s.to_owned()));
        }

        u16::from_str_radix(&digits, radix)
            .map(Self)
            .map_err(|_| ParseHalfError::OutOfRange(s.to_owned()))
    }
}
