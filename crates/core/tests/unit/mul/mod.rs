//! Multiplier tests.
