//! PyO3 wrapper for SeededRng

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::SeededRng;
use crate::sampling::{self, batch_len};

/// Python wrapper for the deterministic generator
///
/// # Example (from Python)
///
/// ```python
/// from mlp_rng_core_rs import RNG
///
/// rng = RNG(42)
/// rng.random_u32()        # 1456360119
/// w = rng.rand(16, -0.1, 0.1)
/// z = rng.randn(16, 0.0, 0.02)
/// ```
#[pyclass(name = "RNG")]
pub struct PyRng {
    inner: SeededRng,
}

#[pymethods]
impl PyRng {
    #[new]
    fn new(seed: u64) -> Self {
        PyRng {
            inner: SeededRng::new(seed),
        }
    }

    /// Current state word
    #[getter]
    fn state(&self) -> u64 {
        self.inner.state()
    }

    fn random_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// Uniform float in [0, 1)
    fn random(&mut self) -> f64 {
        self.inner.next_uniform()
    }

    /// `n` floats from Uniform(a, b)
    ///
    /// # Errors
    ///
    /// Raises ValueError if `n` is negative
    #[pyo3(signature = (n, a=0.0, b=1.0))]
    fn rand(&mut self, n: i64, a: f64, b: f64) -> PyResult<Vec<f64>> {
        let n = batch_len(n).map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(self.inner.uniform_batch(n, a, b))
    }

    /// `n` floats from Normal(mu, sigma)
    ///
    /// # Errors
    ///
    /// Raises ValueError if `n` is negative
    #[pyo3(signature = (n, mu=0.0, sigma=1.0))]
    fn randn(&mut self, n: i64, mu: f64, sigma: f64) -> PyResult<Vec<f64>> {
        let n = batch_len(n).map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(self.inner.normal_batch(n, mu, sigma))
    }

    fn __repr__(&self) -> String {
        format!("RNG(state={})", self.inner.state())
    }
}

/// Box-Muller transform of two uniforms into two standard normals
#[pyfunction]
pub fn box_muller_transform(u1: f64, u2: f64) -> (f64, f64) {
    sampling::box_muller(u1, u2)
}
