//! Distribution sampling on top of [`SeededRng`].
//!
//! Batches consume the generator strictly in order: element `i` of a batch
//! is built from the draws that come after those of element `i - 1`, and
//! nothing is buffered between calls.
//!
//! # Example
//!
//! ```
//! use mlp_rng_core_rs::SeededRng;
//!
//! let mut rng = SeededRng::new(42);
//! let weights = rng.uniform_batch(4, -0.5, 0.5);
//! let noise = rng.normal_batch(3, 0.0, 0.02);
//! assert_eq!(weights.len(), 4);
//! assert_eq!(noise.len(), 3);
//! ```

mod box_muller;

pub use box_muller::box_muller;

use crate::rng::SeededRng;
use thiserror::Error;

/// Errors raised at the sampling call boundary
#[derive(Debug, Error, PartialEq)]
pub enum SamplingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convert a signed batch size into a length.
///
/// Callers holding a signed count (FFI, configuration files) go through this
/// before requesting a batch; negative sizes are rejected.
///
/// # Example
/// ```
/// use mlp_rng_core_rs::sampling::{batch_len, SamplingError};
///
/// assert_eq!(batch_len(3), Ok(3));
/// assert!(matches!(batch_len(-1), Err(SamplingError::InvalidArgument(_))));
/// ```
pub fn batch_len(n: i64) -> Result<usize, SamplingError> {
    usize::try_from(n).map_err(|_| {
        SamplingError::InvalidArgument(format!("batch size must be non-negative, got {}", n))
    })
}

impl SeededRng {
    /// Draw `n` values from Uniform(low, high).
    ///
    /// Each value is `next_uniform() * (high - low) + low`, in draw order.
    /// Bounds are not checked; `low > high` mirrors the interval.
    pub fn uniform_batch(&mut self, n: usize, low: f64, high: f64) -> Vec<f64> {
        log::trace!("uniform batch: n={} low={} high={}", n, low, high);
        let width = high - low;
        (0..n).map(|_| self.next_uniform() * width + low).collect()
    }

    /// Draw `n` values from Uniform(0, 1).
    pub fn rand(&mut self, n: usize) -> Vec<f64> {
        self.uniform_batch(n, 0.0, 1.0)
    }

    /// Draw `n` values from Normal(mu, sigma).
    ///
    /// Uniforms are consumed in pairs `(u1, u2)` and pushed through
    /// [`box_muller`]. For odd `n` the final pair's second output is
    /// dropped, but both of its uniforms are still drawn, so the generator
    /// always advances by `2 * ceil(n / 2)` draws.
    ///
    /// A negative `sigma` is accepted and reflects the distribution.
    pub fn normal_batch(&mut self, n: usize, mu: f64, sigma: f64) -> Vec<f64> {
        log::trace!("normal batch: n={} mu={} sigma={}", n, mu, sigma);
        let pairs = n.div_ceil(2);
        let mut out = Vec::with_capacity(pairs * 2);
        for _ in 0..pairs {
            let u1 = self.next_uniform();
            let u2 = self.next_uniform();
            let (z1, z2) = box_muller(u1, u2);
            out.push(z1 * sigma + mu);
            out.push(z2 * sigma + mu);
        }
        out.truncate(n);
        out
    }

    /// Draw `n` values from Normal(0, 1).
    pub fn randn(&mut self, n: usize) -> Vec<f64> {
        self.normal_batch(n, 0.0, 1.0)
    }
}
