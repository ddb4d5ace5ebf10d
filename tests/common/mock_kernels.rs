//! Mock integrand kernels for testing
//!
//! These kernels have known analytical integrals, making them ideal for
//! validating quadrature accuracy.

use ellint_rs::integrand::Integrand;

// =================================================================================================
// Cosine: f(x) = cos(x)
// =================================================================================================

/// Cosine kernel: `f(x) = cos(x)`
///
/// Analytical integral: `sin(b) − sin(a)`
///
/// Smooth but with nonvanishing odd derivatives at generic endpoints, so the
/// trapezoidal rule shows its textbook O(h²) error decay — the right probe
/// for convergence-order tests.
pub struct CosineKernel;

impl CosineKernel {
    /// Compute the exact integral over `[a, b]`
    pub fn analytical_integral(&self, a: f64, b: f64) -> f64 {
        b.sin() - a.sin()
    }
}

impl Integrand for CosineKernel {
    fn evaluate(&self, x: f64) -> f64 {
        x.cos()
    }

    fn name(&self) -> &str {
        "Cosine"
    }
}

// =================================================================================================
// Exponential: f(x) = exp(x)
// =================================================================================================

/// Exponential kernel: `f(x) = exp(x)`
///
/// Analytical integral: `exp(b) − exp(a)`
///
/// Every derivative is the function itself, so no error term ever vanishes
/// by accident; the full Euler–Maclaurin expansion is in play.
pub struct ExponentialKernel;

impl ExponentialKernel {
    /// Compute the exact integral over `[a, b]`
    pub fn analytical_integral(&self, a: f64, b: f64) -> f64 {
        b.exp() - a.exp()
    }
}

impl Integrand for ExponentialKernel {
    fn evaluate(&self, x: f64) -> f64 {
        x.exp()
    }

    fn name(&self) -> &str {
        "Exponential"
    }
}
