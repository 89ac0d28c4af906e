//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm with a 32-bit output derivation.
//! CRITICAL: Every draw goes through an explicitly owned [`SeededRng`].
//! There is no global generator; independent streams are independent values.

mod xorshift;

pub use xorshift::SeededRng;
