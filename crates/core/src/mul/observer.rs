//! Diagnostic observers for the multiplier.
//!
//! The multiplier reports its intermediate values through [`MultiplyObserver`]
//! instead of printing them. Hooks return `()` and receive copies, so an
//! observer can watch a multiplication but never change it.

use crate::format::Half;

/// `tracing` target used by [`TracingObserver`].
pub const TRACE_TARGET: &str = "halfmul::mul";

/// Short-circuit branch taken by the multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialCase {
    /// An operand was NaN; the result is the canonical NaN.
    Nan,
    /// An operand was infinite (and neither was NaN); the result is a signed infinity.
    Infinity,
    /// An operand was zero (and neither was NaN or infinite); the result is a signed zero.
    Zero,
}

/// Receives the intermediate values of a multiplication.
///
/// Every hook has an empty default body, so implementors only override what
/// they care about. Hooks are called in this order:
/// `operands`, then either `special_case` or `product`, then `result`.
pub trait MultiplyObserver {
    /// Called with both operands before classification.
    fn operands(&self, _lhs: Half, _rhs: Half) {}

    /// Called when a special-value branch short-circuits the arithmetic.
    fn special_case(&self, _case: SpecialCase) {}

    /// Called with the decoded operands and their wide product.
    fn product(&self, _lhs: f64, _rhs: f64, _exact: f64) {}

    /// Called with the returned pattern.
    fn result(&self, _result: Half) {}
}

impl<T: MultiplyObserver + ?Sized> MultiplyObserver for &T {
    fn operands(&self, lhs: Half, rhs: Half) {
        (**self).operands(lhs, rhs);
    }

    fn special_case(&self, case: SpecialCase) {
        (**self).special_case(case);
    }

    fn product(&self, lhs: f64, rhs: f64, exact: f64) {
        (**self).product(lhs, rhs, exact);
    }

    fn result(&self, result: Half) {
        (**self).result(result);
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl MultiplyObserver for NoopObserver {}

/// Observer that emits `debug` events through `tracing`.
///
/// Events use the [`TRACE_TARGET`] target, so they can be enabled on their own
/// with a filter such as `RUST_LOG=halfmul::mul=debug`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingObserver;

impl MultiplyObserver for TracingObserver {
    fn operands(&self, lhs: Half, rhs: Half) {
        tracing::debug!(target: TRACE_TARGET, a = %lhs, b = %rhs, "multiply");
    }

    fn special_case(&self, case: SpecialCase) {
        tracing::debug!(target: TRACE_TARGET, ?case, "special case");
    }

    fn product(&self, lhs: f64, rhs: f64, exact: f64) {
        tracing::debug!(
            target: TRACE_TARGET,
            "exact multiplication: {lhs:.10} * {rhs:.10} = {exact:.10}"
        );
    }

    fn result(&self, result: Half) {
        tracing::debug!(target: TRACE_TARGET, result = %result, "result");
    }
}
