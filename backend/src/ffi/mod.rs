//! PyO3 bindings
//!
//! Exposes the generator and step timer to Python under the names the
//! training scripts already use (`RNG`, `StepTimer`).

pub mod rng;
pub mod timer;
