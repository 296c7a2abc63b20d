//! `Half` value type tests.

use halfmul_core::{Category, Half, ParseHalfError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_constants() {
    assert_eq!(Half::ZERO.to_bits(), 0x0000);
    assert_eq!(Half::NEG_ZERO.to_bits(), 0x8000);
    assert_eq!(Half::ONE.to_f64(), 1.0);
    assert_eq!(Half::MAX.to_f64(), 65504.0);
    assert_eq!(Half::INFINITY.to_f64(), f64::INFINITY);
    assert_eq!(Half::NEG_INFINITY.to_f64(), f64::NEG_INFINITY);
    assert!(Half::NAN.is_nan());
    assert_eq!(Half::NAN.to_bits(), 0x7C01);
}

#[test]
fn test_signed_zero_is_bitwise_distinct() {
    assert_ne!(Half::ZERO, Half::NEG_ZERO);
    assert_eq!(Half::ZERO.to_f64(), Half::NEG_ZERO.to_f64());
    assert!(Half::NEG_ZERO.is_sign_negative());
    assert!(!Half::ZERO.is_sign_negative());
}

#[test]
fn test_conversions() {
    let h = Half::from(0x4689u16);
    assert_eq!(u16::from(h), 0x4689);
    assert_eq!(f64::from(h), 6.53515625);
    assert_eq!(h.category(), Category::Normal {
        negative: false,
        exponent: 17,
        fraction: 0x289
    });
    assert_eq!(Half::from_f64(6.53515625), h);
    assert!(Half::from_bits(0xFC00).is_infinite());
}

#[test]
fn test_mul_operator_uses_default_multiplier() {
    let a = Half::from_bits(0x4689);
    let b = Half::from_bits(0x0025);
    assert_eq!((a * b).to_bits(), 0x00F2);
    assert_eq!(Half::NEG_ZERO * Half::ONE, Half::NEG_ZERO);
    assert_eq!(Half::NAN * Half::ZERO, Half::NAN);
}

#[rstest]
#[case(0x4689, "0x4689 = 6.5351562500 (sign=0, exp=17, frac=0x289)")]
#[case(0x0025, "0x0025 = 0.0000022054 (sign=0, exp=0, frac=0x025)")]
#[case(0x8000, "0x8000 = -0.0000000000 (sign=1, exp=0, frac=0x000)")]
#[case(0x3C00, "0x3c00 = 1.0000000000 (sign=0, exp=15, frac=0x000)")]
#[case(0xFC00, "0xfc00 = -inf (sign=1, exp=31, frac=0x000)")]
#[case(0x7C01, "0x7c01 = NaN (sign=0, exp=31, frac=0x001)")]
fn test_display_diagnostic_form(#[case] bits: u16, #[case] expected: &str) {
    assert_eq!(Half::from_bits(bits).to_string(), expected);
}

#[test]
fn test_debug_and_hex_formatting() {
    let h = Half::from_bits(0x00F2);
    assert_eq!(format!("{h:?}"), "Half(0x00f2)");
    assert_eq!(format!("{h:#06x}"), "0x00f2");
    assert_eq!(format!("{h:04X}"), "00F2");
    assert_eq!(format!("{h:016b}"), "0000000011110010");
}

#[rstest]
#[case("0x4689", 0x4689)]
#[case("0X00F2", 0x00F2)]
#[case("7c01", 0x7C01)]
#[case("  0x3c00  ", 0x3C00)]
#[case("0x7C_01", 0x7C01)]
#[case("0b1_00000_0000000000", 0x8000)]
#[case("0B0111110000000000", 0x7C00)]
#[case("ffff", 0xFFFF)]
fn test_parse_accepts(#[case] text: &str, #[case] expected: u16) {
    assert_eq!(text.parse::<Half>(), Ok(Half::from_bits(expected)));
}

#[rstest]
#[case("", ParseHalfError::Empty)]
#[case("0x", ParseHalfError::Empty)]
#[case("0b__", ParseHalfError::Empty)]
#[case("0xZZ", ParseHalfError::InvalidDigit("0xZZ".to_owned()))]
#[case("0b102", ParseHalfError::InvalidDigit("0b102".to_owned()))]
#[case("-1", ParseHalfError::InvalidDigit("-1".to_owned()))]
#[case("0x10000", ParseHalfError::OutOfRange("0x10000".to_owned()))]
#[case("0b1_0000_0000_0000_0000", ParseHalfError::OutOfRange("0b1_0000_0000_0000_0000".to_owned()))]
fn test_parse_rejects(#[case] text: &str, #[case] expected: ParseHalfError) {
    assert_eq!(text.parse::<Half>(), Err(expected));
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(ParseHalfError::Empty.to_string(), "empty bit pattern");
    assert_eq!(
        ParseHalfError::InvalidDigit("0xZZ".into()).to_string(),
        "invalid digit in bit pattern `0xZZ`"
    );
    assert_eq!(
        ParseHalfError::OutOfRange("0x10000".into()).to_string(),
        "bit pattern `0x10000` does not fit in 16 bits"
    );
}
