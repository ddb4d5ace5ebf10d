//! Helper functions for integration tests

/// Compute relative error: |actual − expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Reference value of the complete elliptic integral `K(z)` from its
/// hypergeometric series:
///
/// ```text
/// K(z) = (π/2) · Σ_{n>=0} [ (2n−1)!! / (2n)!! ]² · z^{2n}
/// ```
///
/// The series converges like `z^{2n}`, so 60 terms give full double
/// precision for `|z| <= 0.6`. Keep test moduli in that range; for larger
/// moduli cross-validate two quadrature methods against each other instead.
pub fn elliptic_series(z: f64) -> f64 {
    assert!(z.abs() <= 0.6, "series helper is only accurate for |z| <= 0.6");

    let z2 = z * z;
    let mut coefficient: f64 = 1.0; // [ (2n−1)!! / (2n)!! ]²
    let mut power = 1.0; // z^{2n}
    let mut sum = 1.0;

    for n in 1..=60u32 {
        let ratio = (2.0 * n as f64 - 1.0) / (2.0 * n as f64);
        coefficient *= ratio * ratio;
        power *= z2;
        sum += coefficient * power;
    }

    std::f64::consts::FRAC_PI_2 * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn series_at_zero_is_half_pi() {
        assert_eq!(elliptic_series(0.0), FRAC_PI_2);
    }

    #[test]
    fn series_grows_with_modulus() {
        assert!(elliptic_series(0.5) > elliptic_series(0.3));
        assert!(elliptic_series(0.3) > elliptic_series(0.0));
    }
}
