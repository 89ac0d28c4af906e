//! Step timing with an exponential moving average
//!
//! [`StepTimer`] smooths per-step wall time with decay `ema_alpha` and
//! reports the bias-corrected estimate `ema / (1 - alpha^step)`, which
//! removes the pull toward zero from the cold start.
//!
//! # Example
//!
//! ```
//! use mlp_rng_core_rs::StepTimer;
//!
//! let mut timer = StepTimer::default();
//! for _ in 0..3 {
//!     let _step = timer.start();
//!     // ... one unit of work ...
//! }
//! assert_eq!(timer.steps(), 3);
//! assert!(timer.dt() >= 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Decay used when none is configured.
pub const DEFAULT_EMA_ALPHA: f64 = 0.9;

#[derive(Debug, Error, PartialEq)]
pub enum TimerError {
    #[error("EMA decay must be in [0, 1), got {0}")]
    InvalidDecay(f64),
}

/// Step timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTimerConfig {
    /// Weight kept by the previous estimate on each update
    #[serde(default = "default_ema_alpha")]
    pub ema_alpha: f64,
}

fn default_ema_alpha() -> f64 {
    DEFAULT_EMA_ALPHA
}

impl Default for StepTimerConfig {
    fn default() -> Self {
        Self {
            ema_alpha: DEFAULT_EMA_ALPHA,
        }
    }
}

impl StepTimerConfig {
    /// Reject decays that make bias correction divide by zero or diverge.
    pub fn validate(&self) -> Result<(), TimerError> {
        if (0.0..1.0).contains(&self.ema_alpha) {
            Ok(())
        } else {
            Err(TimerError::InvalidDecay(self.ema_alpha))
        }
    }
}

/// EMA-smoothed step timer
#[derive(Debug, Clone)]
pub struct StepTimer {
    ema_alpha: f64,
    ema_time: f64,
    corrected_ema_time: f64,
    step: u64,
}

impl Default for StepTimer {
    fn default() -> Self {
        Self::with_alpha(DEFAULT_EMA_ALPHA)
    }
}

impl StepTimer {
    pub fn new(config: StepTimerConfig) -> Result<Self, TimerError> {
        config.validate()?;
        Ok(Self::with_alpha(config.ema_alpha))
    }

    fn with_alpha(ema_alpha: f64) -> Self {
        Self {
            ema_alpha,
            ema_time: 0.0,
            corrected_ema_time: 0.0,
            step: 0,
        }
    }

    /// Start timing one step. The step is recorded when the guard drops.
    pub fn start(&mut self) -> StepGuard<'_> {
        StepGuard {
            timer: self,
            started: Instant::now(),
        }
    }

    /// Run `f` as one timed step and return its result.
    pub fn time<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let _guard = self.start();
        f()
    }

    /// Fold one step's duration into the estimate.
    pub fn record(&mut self, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        self.ema_time = self.ema_alpha * self.ema_time + (1.0 - self.ema_alpha) * secs;
        self.step += 1;
        // saturates past i32::MAX steps
        let exponent = i32::try_from(self.step).unwrap_or(i32::MAX);
        self.corrected_ema_time = self.ema_time / (1.0 - self.ema_alpha.powi(exponent));
        log::debug!(
            "step {}: {:.6}s (ema {:.6}s)",
            self.step,
            secs,
            self.corrected_ema_time
        );
    }

    /// Bias-corrected EMA of step time, in seconds. `0.0` before any step.
    pub fn dt(&self) -> f64 {
        self.corrected_ema_time
    }

    /// Number of recorded steps.
    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn ema_alpha(&self) -> f64 {
        self.ema_alpha
    }
}

/// Scope guard returned by [`StepTimer::start`].
#[must_use = "the step is recorded when the guard is dropped"]
pub struct StepGuard<'a> {
    timer: &'a mut StepTimer,
    started: Instant,
}

impl StepGuard<'_> {
    /// Time elapsed since the step started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for StepGuard<'_> {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        self.timer.record(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alpha() {
        assert_eq!(StepTimer::default().ema_alpha(), 0.9);
        assert_eq!(StepTimerConfig::default().ema_alpha, 0.9);
    }

    #[test]
    fn test_first_step_is_unbiased() {
        let mut timer = StepTimer::default();
        timer.record(Duration::from_secs(1));
        assert_eq!(timer.dt(), 1.0);
    }

    #[test]
    fn test_alpha_one_rejected() {
        let err = StepTimer::new(StepTimerConfig { ema_alpha: 1.0 }).unwrap_err();
        assert_eq!(err, TimerError::InvalidDecay(1.0));
    }

    #[test]
    fn test_zero_alpha_tracks_last_step() {
        let mut timer = StepTimer::new(StepTimerConfig { ema_alpha: 0.0 }).unwrap();
        timer.record(Duration::from_millis(250));
        timer.record(Duration::from_millis(750));
        assert!((timer.dt() - 0.75).abs() < 1e-12);
    }
}
