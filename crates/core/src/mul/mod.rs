//! binary16 multiplication.
//!
//! The multiplier classifies both operands, short-circuits the special-value
//! cases, and otherwise multiplies in `f64` and narrows the product through the
//! codec. It provides:
//! 1. **Free Function:** [`multiply`] with the default configuration.
//! 2. **Configurable Unit:** [`Multiplier`], carrying a rounding mode and an observer.
//! 3. **Diagnostics:** [`observer`], the hooks that replace inline debug printing.

/// Observer trait and the built-in observers.
pub mod observer;

pub use observer::{MultiplyObserver, NoopObserver, SpecialCase, TracingObserver};

use crate::codec::{RoundingMode, decode, encode_with_rm};
use crate::common::constants::{CANONICAL_NAN, EXPONENT_MASK, SIGN_MASK};
use crate::config::Config;
use crate::format::{Half, classify};

/// Multiplies two binary16 patterns with the default configuration.
///
/// Rounds the product to nearest, ties to even, and performs no tracing.
///
/// # Examples
///
/// ```
/// use halfmul_core::multiply;
///
/// assert_eq!(multiply(0x4689, 0x0025), 0x00F2);
/// assert_eq!(multiply(0x8000, 0x3C00), 0x8000);
/// assert_eq!(multiply(0x7E00, 0x3C00), 0x7C01);
/// ```
#[inline]
pub fn multiply(a: u16, b: u16) -> u16 {
    Multiplier::new().multiply(a, b)
}

/// binary16 multiplier.
///
/// Pure and total over all 2^32 operand pairs. The observer is only told what
/// happened; it has no say in the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct Multiplier<O = NoopObserver> {
    rounding: RoundingMode,
    observer: O,
}

impl Multiplier {
    /// Creates a multiplier that rounds to nearest-even and observes nothing.
    pub const fn new() -> Self {
        Self {
            rounding: RoundingMode::Rne,
            observer: NoopObserver,
        }
    }

    /// Creates a multiplier from a configuration.
    ///
    /// `config.trace` is not consulted here; tracing is chosen by the
    /// observer type (see [`Multiplier::with_observer`]).
    pub const fn from_config(config: &Config) -> Self {
        Self {
            rounding: config.rounding,
            observer: NoopObserver,
        }
    }
}

impl<O: MultiplyObserver> Multiplier<O> {
    /// Replaces the observer, keeping the rounding mode.
    pub fn with_observer<P: MultiplyObserver>(self, observer: P) -> Multiplier<P> {
        Multiplier {
            rounding: self.rounding,
            observer,
        }
    }

    /// Replaces the rounding mode used to narrow generic products.
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Rounding mode used to narrow generic products.
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The attached observer.
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Multiplies two raw patterns.
    ///
    /// # Arguments
    ///
    /// * `a` - Left operand.
    /// * `b` - Right operand.
    ///
    /// # Returns
    ///
    /// The product pattern:
    /// - canonical NaN if either operand is NaN;
    /// - otherwise a signed infinity if either operand is infinite, even when
    ///   the other is zero (IEEE 754 would give NaN for `∞ × 0`);
    /// - otherwise a signed zero if either operand is zero;
    /// - otherwise the wide product narrowed with [`Multiplier::rounding`].
    ///
    /// Signed results use `sign(a) XOR sign(b)`.
    pub fn multiply(&self, a: u16, b: u16) -> u16 {
        self.observer.operands(Half::from_bits(a), Half::from_bits(b));
        let result = self.compute(a, b);
        self.observer.result(Half::from_bits(result));
        result
    }

    /// Multiplies two [`Half`] values.
    #[inline]
    pub fn multiply_half(&self, a: Half, b: Half) -> Half {
        Half::from_bits(self.multiply(a.to_bits(), b.to_bits()))
    }

    fn compute(&self, a: u16, b: u16) -> u16 {
        let (lhs, rhs) = (classify(a), classify(b));
        let sign = (a ^ b) & SIGN_MASK;

        if lhs.is_nan() || rhs.is_nan() {
            self.observer.special_case(SpecialCase::Nan);
            return CANONICAL_NAN;
        }
        // No zero check here: ∞ × 0 stays infinite.
        if lhs.is_infinite() || rhs.is_infinite() {
            self.observer.special_case(SpecialCase::Infinity);
            return sign | EXPONENT_MASK;
        }
        if lhs.is_zero() || rhs.is_zero() {
            self.observer.special_case(SpecialCase::Zero);
            return sign;
        }

        let (lhs, rhs) = (decode(a), decode(b));
        let exact = lhs * rhs;
        self.observer.product(lhs, rhs, exact);
        encode_with_rm(exact, self.rounding)
    }
}
