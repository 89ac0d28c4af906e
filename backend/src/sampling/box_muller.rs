//! Box-Muller transform

use std::f64::consts::PI;

/// Map two independent Uniform(0, 1) samples to two independent N(0, 1) samples.
///
/// `u1` must be strictly positive. At `u1 == 0.0` the radius is infinite and
/// the outputs are non-finite (`inf` or `NaN`); they are returned as-is.
///
/// # Example
/// ```
/// use mlp_rng_core_rs::sampling::box_muller;
///
/// let (z1, z2) = box_muller(0.5, 0.0);
/// assert!((z1 - (2.0 * 2f64.ln()).sqrt()).abs() < 1e-12);
/// assert_eq!(z2, 0.0);
/// ```
pub fn box_muller(u1: f64, u2: f64) -> (f64, f64) {
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;
    (r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_preserved() {
        for &(u1, u2) in &[(0.1, 0.3), (0.5, 0.9), (0.99, 0.01)] {
            let (z1, z2) = box_muller(u1, u2);
            let expected = -2.0 * f64::ln(u1);
            assert!((z1 * z1 + z2 * z2 - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_u1_one_gives_zero_pair() {
        let (z1, z2) = box_muller(1.0, 0.42);
        assert_eq!(z1.abs(), 0.0);
        assert_eq!(z2.abs(), 0.0);
    }

    #[test]
    fn test_quarter_turn() {
        let (z1, z2) = box_muller(0.5, 0.25);
        let r = (2.0 * 2f64.ln()).sqrt();
        assert!(z1.abs() < 1e-12);
        assert!((z2 - r).abs() < 1e-12);
    }

    #[test]
    fn test_zero_u1_is_non_finite() {
        let (z1, z2) = box_muller(0.0, 0.0);
        assert!(z1.is_infinite());
        assert!(z2.is_nan());

        let (z1, z2) = box_muller(0.0, 0.1);
        assert!(!z1.is_finite());
        assert!(!z2.is_finite());
    }
}
