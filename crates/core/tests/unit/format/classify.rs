//! Classification tests.
//!
//! Every pattern must land in exactly one category, and the category must
//! agree with the field definitions.

use halfmul_core::{Category, Fields, classify};
use rstest::rstest;

use crate::common::patterns;

#[rstest]
#[case::positive_zero(0x0000, Category::Zero { negative: false })]
#[case::negative_zero(0x8000, Category::Zero { negative: true })]
#[case::min_subnormal(0x0001, Category::Subnormal { negative: false, fraction: 1 })]
#[case::max_subnormal(0x03FF, Category::Subnormal { negative: false, fraction: 0x3FF })]
#[case::negative_subnormal(0x8025, Category::Subnormal { negative: true, fraction: 0x25 })]
#[case::min_normal(0x0400, Category::Normal { negative: false, exponent: 1, fraction: 0 })]
#[case::one(0x3C00, Category::Normal { negative: false, exponent: 15, fraction: 0 })]
#[case::scenario_operand(0x4689, Category::Normal { negative: false, exponent: 17, fraction: 0x289 })]
#[case::max_normal(0x7BFF, Category::Normal { negative: false, exponent: 30, fraction: 0x3FF })]
#[case::negative_max_normal(0xFBFF, Category::Normal { negative: true, exponent: 30, fraction: 0x3FF })]
#[case::positive_infinity(0x7C00, Category::Infinity { negative: false })]
#[case::negative_infinity(0xFC00, Category::Infinity { negative: true })]
#[case::canonical_nan(0x7C01, Category::Nan)]
#[case::quiet_nan(0x7E00, Category::Nan)]
#[case::all_ones(0xFFFF, Category::Nan)]
fn test_classify_vectors(#[case] bits: u16, #[case] expected: Category) {
    assert_eq!(classify(bits), expected, "classify({bits:#06x})");
}

#[test]
fn test_classify_agrees_with_fields() {
    for bits in patterns::all() {
        let Fields {
            sign,
            exponent,
            fraction,
        } = Fields::from_bits(bits);
        let negative = sign == 1;
        let expected = match (exponent, fraction) {
            (0, 0) => Category::Zero { negative },
            (0, f) => Category::Subnormal {
                negative,
                fraction: f,
            },
            (31, 0) => Category::Infinity { negative },
            (31, _) => Category::Nan,
            (e, f) => Category::Normal {
                negative,
                exponent: e,
                fraction: f,
            },
        };
        assert_eq!(classify(bits), expected, "classify({bits:#06x})");
    }
}

#[test]
fn test_category_population() {
    let mut counts = [0usize; 5];
    for bits in patterns::all() {
        let slot = match classify(bits) {
            Category::Zero { .. } => 0,
            Category::Subnormal { .. } => 1,
            Category::Normal { .. } => 2,
            Category::Infinity { .. } => 3,
            Category::Nan => 4,
        };
        counts[slot] += 1;
    }
    // 2 signs × (1 zero, 1023 subnormals, 30 × 1024 normals, 1 infinity, 1023 NaNs)
    assert_eq!(counts, [2, 2 * 1023, 2 * 30 * 1024, 2, 2 * 1023]);
    assert_eq!(counts.iter().sum::<usize>(), 1 << 16);
}

#[test]
fn test_category_predicates() {
    let zero = classify(0x8000);
    assert!(zero.is_zero() && zero.is_finite() && !zero.is_nan());
    assert_eq!(zero.is_negative(), Some(true));

    let inf = classify(0x7C00);
    assert!(inf.is_infinite() && !inf.is_finite());
    assert_eq!(inf.is_negative(), Some(false));

    let nan = classify(0xFC01);
    assert!(nan.is_nan() && !nan.is_finite() && !nan.is_infinite());
    assert_eq!(nan.is_negative(), None, "NaN sign is not meaningful");

    assert!(classify(0x0001).is_finite());
    assert!(classify(0x3C00).is_finite());
}

#[test]
fn test_category_names() {
    assert_eq!(classify(0x0000).to_string(), "zero");
    assert_eq!(classify(0x0001).to_string(), "subnormal");
    assert_eq!(classify(0x3C00).to_string(), "normal");
    assert_eq!(classify(0xFC00).to_string(), "infinity");
    assert_eq!(classify(0x7C01).to_string(), "nan");
}
