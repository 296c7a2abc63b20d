//! binary16 codec.
//!
//! Maps 16-bit patterns to and from `f64`, the wide real used for arithmetic.
//! It provides:
//! 1. **Decode:** [`decode`] is exact; every binary16 value is representable in `f64`.
//! 2. **Encode:** [`encode`] narrows a wide real by truncation toward zero.
//! 3. **Rounding:** [`encode_with_rm`] narrows with an explicit [`RoundingMode`].
//!
//! Powers of two are built directly from `f64` bits rather than via `powi`, so
//! every scaling step in both directions is exact and only the final fraction
//! rounding loses information.

/// Rounding mode definitions.
pub mod rounding_modes;

pub use rounding_modes::RoundingMode;

use crate::common::constants::{
    CANONICAL_NAN, EXPONENT_BIAS, EXPONENT_MAX_NORMAL, EXPONENT_MIN_UNBIASED, EXPONENT_MASK,
    FRACTION_BITS, FRACTION_SCALE, SIGN_MASK,
};
use crate::format::{Category, classify};

/// Exponent bias of `f64`.
const F64_EXPONENT_BIAS: i32 = 1023;

/// Shift of the `f64` exponent field.
const F64_FRACTION_BITS: u32 = 52;

/// `2^n` for `n` in the normal `f64` exponent range.
#[inline]
fn pow2(n: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&n));
    f64::from_bits(((n + F64_EXPONENT_BIAS) as u64) << F64_FRACTION_BITS)
}

/// `floor(log2(m))` for a positive normal `f64`, read from its exponent field.
#[inline]
fn floor_log2(magnitude: f64) -> i32 {
    ((magnitude.to_bits() >> F64_FRACTION_BITS) & 0x7FF) as i32 - F64_EXPONENT_BIAS
}

#[inline]
const fn signum(negative: bool) -> f64 {
    if negative { -1.0 } else { 1.0 }
}

/// Decodes a binary16 pattern to a wide real.
///
/// Total: zeros keep their sign, infinities map to `±f64::INFINITY`, and every
/// NaN pattern maps to `f64::NAN`.
///
/// # Arguments
///
/// * `bits` - Any 16-bit pattern.
///
/// # Returns
///
/// The exact value of `bits` as an `f64`.
///
/// # Examples
///
/// ```
/// use halfmul_core::decode;
///
/// assert_eq!(decode(0x3C00), 1.0);
/// assert_eq!(decode(0x4689), 6.53515625);
/// assert_eq!(decode(0x0001), 2f64.powi(-24));
/// assert!(decode(0x8000).is_sign_negative());
/// assert!(decode(0x7E00).is_nan());
/// ```
pub fn decode(bits: u16) -> f64 {
    match classify(bits) {
        Category::Zero { negative } => {
            if negative {
                -0.0
            } else {
                0.0
            }
        }
        Category::Subnormal { negative, fraction } => {
            signum(negative) * pow2(EXPONENT_MIN_UNBIASED) * (f64::from(fraction) / FRACTION_SCALE)
        }
        Category::Normal {
            negative,
            exponent,
            fraction,
        } => {
            signum(negative)
                * pow2(i32::from(exponent) - EXPONENT_BIAS)
                * (1.0 + f64::from(fraction) / FRACTION_SCALE)
        }
        Category::Infinity { negative } => {
            if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        }
        Category::Nan => f64::NAN,
    }
}

/// Encodes a wide real to binary16, truncating toward zero.
///
/// Equivalent to [`encode_with_rm`] with [`RoundingMode::Rtz`].
///
/// # Examples
///
/// ```
/// use halfmul_core::encode;
///
/// assert_eq!(encode(1.0), 0x3C00);
/// assert_eq!(encode(-0.0), 0x8000);
/// assert_eq!(encode(f64::NEG_INFINITY), 0xFC00);
/// assert_eq!(encode(-f64::NAN), 0x7C01);
/// // 1 + 1023.9/1024 truncates to the largest fraction in the binade.
/// assert_eq!(encode(1.0 + 1023.9 / 1024.0), 0x3FFF);
/// ```
#[inline]
pub fn encode(value: f64) -> u16 {
    encode_with_rm(value, RoundingMode::Rtz)
}

/// Encodes a wide real to binary16 with an explicit rounding mode.
///
/// Special inputs: `±0.0` keep their sign, `±∞` map to the signed infinity,
/// and every NaN maps to the canonical NaN `0x7C01`.
///
/// Finite non-zero inputs below `2^-14` take the subnormal path
/// (`fraction = round(|v| × 2^24)`); all others take the normal path with the
/// exponent `floor(log2(|v|)) + 15`. A magnitude whose exponent exceeds 30
/// encodes as a clean signed infinity. With [`RoundingMode::Rne`] a fraction
/// that rounds up to 1024 carries into the exponent field, which promotes the
/// largest subnormals to `2^-14` and the top of the last binade to infinity.
///
/// # Arguments
///
/// * `value` - Any `f64`.
/// * `rm` - Rounding applied to the fraction.
///
/// # Returns
///
/// The binary16 pattern.
pub fn encode_with_rm(value: f64, rm: RoundingMode) -> u16 {
    if value.is_nan() {
        return CANONICAL_NAN;
    }

    let sign = if value.is_sign_negative() { SIGN_MASK } else { 0 };
    if value == 0.0 {
        return sign;
    }
    if value.is_infinite() {
        return sign | EXPONENT_MASK;
    }

    let magnitude = value.abs();
    let magnitude_bits = if magnitude < pow2(EXPONENT_MIN_UNBIASED) {
        // |v| < 2^-14 keeps the scaled fraction below 1024.
        rm.round(magnitude * pow2(FRACTION_BITS as i32 - EXPONENT_MIN_UNBIASED))
    } else {
        let unbiased = floor_log2(magnitude);
        let exponent = unbiased + EXPONENT_BIAS;
        if exponent > EXPONENT_MAX_NORMAL {
            return sign | EXPONENT_MASK;
        }
        let fraction = rm.round((magnitude / pow2(unbiased) - 1.0) * FRACTION_SCALE);
        ((exponent as u64) << FRACTION_BITS) + fraction
    };

    sign | magnitude_bits.min(u64::from(EXPONENT_MASK)) as u16
}
