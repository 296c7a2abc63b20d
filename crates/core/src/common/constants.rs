//! binary16 layout constants.
//!
//! A half-precision pattern is `s eeeee ffffffffff`: one sign bit, five
//! exponent bits stored with a bias of 15, and ten fraction bits.

/// Number of fraction (significand) bits.
pub const FRACTION_BITS: u32 = 10;

/// Number of exponent bits.
pub const EXPONENT_BITS: u32 = 5;

/// Exponent bias.
pub const EXPONENT_BIAS: i32 = 15;

/// Sign bit (bit 15).
pub const SIGN_MASK: u16 = 0x8000;

/// Exponent field (bits 14..10), in place.
pub const EXPONENT_MASK: u16 = 0x7C00;

/// Fraction field (bits 9..0).
pub const FRACTION_MASK: u16 = 0x03FF;

/// Exponent field value reserved for Infinity and NaN.
pub const EXPONENT_SPECIAL: u8 = 0x1F;

/// Largest exponent field value of a normal number.
pub const EXPONENT_MAX_NORMAL: i32 = 30;

/// Unbiased exponent of the smallest normal number (and the scale of subnormals).
pub const EXPONENT_MIN_UNBIASED: i32 = 1 - EXPONENT_BIAS;

/// `2^FRACTION_BITS` as a wide real, the denominator of the fraction field.
pub const FRACTION_SCALE: f64 = 1024.0;

/// Positive zero.
pub const POSITIVE_ZERO: u16 = 0x0000;

/// Negative zero.
pub const NEGATIVE_ZERO: u16 = 0x8000;

/// Positive infinity.
pub const POSITIVE_INFINITY: u16 = 0x7C00;

/// Negative infinity.
pub const NEGATIVE_INFINITY: u16 = 0xFC00;

/// Canonical NaN: sign 0, exponent 31, fraction 1.
///
/// Every NaN produced by this crate uses this pattern; input payloads and
/// signs are discarded.
pub const CANONICAL_NAN: u16 = 0x7C01;

/// One (`2^0 × 1.0`).
pub const ONE: u16 = 0x3C00;

/// Largest finite value, 65504.
pub const MAX_FINITE: u16 = 0x7BFF;

/// Smallest positive normal value, `2^-14`.
pub const MIN_POSITIVE_NORMAL: u16 = 0x0400;

/// Largest subnormal value, `2^-14 × 1023/1024`.
pub const MAX_SUBNORMAL: u16 = 0x03FF;

/// Smallest positive subnormal value, `2^-24`.
pub const MIN_POSITIVE_SUBNORMAL: u16 = 0x0001;
