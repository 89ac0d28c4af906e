//! MLP RNG Core - Rust Engine
//!
//! Deterministic random sampling for seeded training experiments, plus a
//! step timer for instrumentation.
//!
//! # Architecture
//!
//! - **rng**: xorshift64* generator with 32-bit output
//! - **sampling**: Uniform and normal (Box-Muller) batches
//! - **checkpoint**: Snapshot and restore generator state
//! - **timing**: EMA step timer
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same stream, bit for bit
//! 2. Generators are owned values; there is no global RNG
//! 3. Batches consume the stream strictly in order

// Module declarations
pub mod checkpoint;
pub mod rng;
pub mod sampling;
pub mod timing;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, RngSnapshot};
pub use rng::SeededRng;
pub use sampling::{box_muller, SamplingError};
pub use timing::{StepGuard, StepTimer, StepTimerConfig, TimerError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mlp_rng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::rng::PyRng>()?;
    m.add_class::<ffi::timer::PyStepTimer>()?;
    m.add_function(wrap_pyfunction!(ffi::rng::box_muller_transform, m)?)?;
    Ok(())
}
