use halfmul_core::classify;

/// Every 16-bit pattern.
pub fn all() -> impl Iterator<Item = u16> {
    0..=u16::MAX
}

/// Every pattern that is not NaN.
pub fn non_nan() -> impl Iterator<Item = u16> {
    all().filter(|&p| !classify(p).is_nan())
}

/// Every NaN pattern (both signs, every non-zero fraction).
pub fn nans() -> impl Iterator<Item = u16> {
    all().filter(|&p| classify(p).is_nan())
}

/// The four zero/infinity patterns.
pub const ZERO_AND_INFINITY: [u16; 4] = [0x0000, 0x8000, 0x7C00, 0xFC00];
