//! IEEE 754 binary16 (half-precision) codec and multiplier.
//!
//! This crate implements bit-exact half-precision arithmetic on raw `u16`
//! patterns with the following:
//! 1. **Format:** Field layout and classification into zero, subnormal, normal, infinity, and NaN.
//! 2. **Codec:** Exact decoding to `f64` and truncating (or nearest-even) encoding back.
//! 3. **Multiplier:** Special-value short-circuits plus wide-real multiplication of finite operands.
//! 4. **Diagnostics:** An observer seam that reports intermediate values through `tracing`.
//! 5. **Configuration:** JSON-deserializable rounding and tracing settings.
//!
//! ```
//! use halfmul_core::{Half, decode, encode, multiply};
//!
//! assert_eq!(multiply(0x4489, 0x001D), 0x0084);
//! assert_eq!(encode(decode(0x4689)), 0x4689);
//! assert_eq!(Half::from_bits(0x4000) * Half::ONE, Half::from_bits(0x4000));
//! ```

/// Common constants and error types.
pub mod common;
/// Configuration (rounding mode, tracing).
pub mod config;
/// Decode, encode, and rounding modes.
pub mod codec;
/// Field layout, classification, and the `Half` value type.
pub mod format;
/// Multiplication and its observers.
pub mod mul;

pub use crate::codec::{RoundingMode, decode, encode, encode_with_rm};
pub use crate::common::{ConfigError, ParseHalfError, ParseRoundingModeError};
pub use crate::config::Config;
pub use crate::format::{Category, Fields, Half, classify};
pub use crate::mul::{
    Multiplier, MultiplyObserver, NoopObserver, SpecialCase, TracingObserver, multiply,
};
