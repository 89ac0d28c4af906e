//! PyO3 wrapper for StepTimer

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::time::Instant;

use crate::timing::{StepTimer, StepTimerConfig, DEFAULT_EMA_ALPHA};

/// Python context manager timing one step per `with` block
///
/// # Example (from Python)
///
/// ```python
/// from mlp_rng_core_rs import StepTimer
///
/// timer = StepTimer()
/// for batch in loader:
///     with timer:
///         train_step(batch)
/// print(f"{timer.get_dt() * 1000:.2f} ms/step")
/// ```
#[pyclass(name = "StepTimer")]
pub struct PyStepTimer {
    inner: StepTimer,
    started: Option<Instant>,
}

#[pymethods]
impl PyStepTimer {
    /// # Errors
    ///
    /// Raises ValueError if `ema_alpha` is outside [0, 1)
    #[new]
    #[pyo3(signature = (ema_alpha=DEFAULT_EMA_ALPHA))]
    fn new(ema_alpha: f64) -> PyResult<Self> {
        let inner = StepTimer::new(StepTimerConfig { ema_alpha })
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(PyStepTimer {
            inner,
            started: None,
        })
    }

    fn __enter__(mut slf: PyRefMut<'_, Self>) -> PyRefMut<'_, Self> {
        slf.started = Some(Instant::now());
        slf
    }

    #[pyo3(signature = (_exc_type=None, _exc_value=None, _traceback=None))]
    fn __exit__(
        &mut self,
        _exc_type: Option<&Bound<'_, PyAny>>,
        _exc_value: Option<&Bound<'_, PyAny>>,
        _traceback: Option<&Bound<'_, PyAny>>,
    ) -> bool {
        if let Some(started) = self.started.take() {
            self.inner.record(started.elapsed());
        }
        // never swallow exceptions
        false
    }

    /// Bias-corrected EMA of step time in seconds
    fn get_dt(&self) -> f64 {
        self.inner.dt()
    }

    #[getter]
    fn step(&self) -> u64 {
        self.inner.steps()
    }
}
