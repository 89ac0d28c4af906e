//! xorshift64* random number generator
//!
//! A fast, non-cryptographic PRNG with a 64-bit state word. Each draw
//! advances the state through three xor-shifts and returns the upper half
//! of the multiplicative scramble as a `u32`.
//!
//! # Determinism
//!
//! Same seed → same sequence, bit for bit. Seeded experiments depend on
//! this, so the shift amounts and multiplier must never change:
//!
//! | step | operation                              |
//! |------|----------------------------------------|
//! | 1    | `state ^= state >> 12`                 |
//! | 2    | `state ^= state << 25`                 |
//! | 3    | `state ^= state >> 27`                 |
//! | 4    | `(state * 0x2545F4914F6CDD1D) >> 32`   |
//!
//! All arithmetic wraps modulo 2^64.

use serde::{Deserialize, Serialize};

/// Multiplier of the xorshift64* output scramble.
const SCRAMBLE: u64 = 0x2545_F491_4F6C_DD1D;

/// 2^24, the number of distinct values produced by [`SeededRng::next_uniform`].
const UNIFORM_STEPS: f64 = 16_777_216.0;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use mlp_rng_core_rs::SeededRng;
///
/// let mut rng = SeededRng::new(42);
/// assert_eq!(rng.next_u32(), 1456360119);
/// let u = rng.next_uniform(); // [0, 1)
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRng {
    /// Internal state (64-bit)
    state: u64,
}

impl SeededRng {
    /// Create a new RNG with given seed
    ///
    /// The seed is taken as the initial state without adjustment. A seed of
    /// zero is a fixed point of xorshift and yields an all-zero stream; it is
    /// accepted (and logged) rather than remapped.
    ///
    /// # Example
    /// ```
    /// use mlp_rng_core_rs::SeededRng;
    ///
    /// let rng = SeededRng::new(12345);
    /// assert_eq!(rng.state(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        if seed == 0 {
            log::warn!("SeededRng seeded with 0: the output stream is all zeros");
        }
        Self { state: seed }
    }

    /// Generate next random u32 value
    ///
    /// Advances the internal state exactly once.
    ///
    /// # Example
    /// ```
    /// use mlp_rng_core_rs::SeededRng;
    ///
    /// let mut a = SeededRng::new(7);
    /// let mut b = SeededRng::new(7);
    /// assert_eq!(a.next_u32(), b.next_u32());
    /// ```
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        (x.wrapping_mul(SCRAMBLE) >> 32) as u32
    }

    /// Generate a uniform f64 in [0.0, 1.0)
    ///
    /// Keeps the top 24 bits of [`next_u32`](Self::next_u32) and divides by
    /// 2^24, so there are exactly 2^24 evenly spaced outcomes. `0.0` is
    /// reachable, `1.0` is not.
    ///
    /// # Example
    /// ```
    /// use mlp_rng_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(12345);
    /// let p = rng.next_uniform();
    /// assert!(p >= 0.0 && p < 1.0);
    /// ```
    pub fn next_uniform(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / UNIFORM_STEPS
    }

    /// Get current RNG state (for checkpointing/replay)
    ///
    /// `SeededRng::new(rng.state())` continues the stream from this point.
    ///
    /// # Example
    /// ```
    /// use mlp_rng_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(42);
    /// rng.next_u32();
    ///
    /// let mut resumed = SeededRng::new(rng.state());
    /// assert_eq!(rng.next_u32(), resumed.next_u32());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}
