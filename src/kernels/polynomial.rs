//! Polynomial test kernels
//!
//! Simple kernels with closed-form integrals. Their main job is calibration:
//! the trapezoidal rule is exact for polynomials of degree <= 1, and each
//! Richardson extrapolation level buys two more orders, so these kernels pin
//! down exactly where a method's error must vanish.
//!
//! # Available Kernels
//!
//! - [`ConstantKernel`] — `f(x) = c`
//! - [`LinearKernel`]   — `f(x) = slope·x + intercept`
//! - [`MonomialKernel`] — `f(x) = c·xⁿ`
//!
//! Each kernel provides `analytical_integral(a, b)` so tests and benches can
//! compare an estimate against the exact value without repeating the algebra.

use crate::integrand::Integrand;

// =================================================================================================
// Constant: f(x) = c
// =================================================================================================

/// Constant kernel `f(x) = c`.
///
/// The trapezoidal rule is exact for this kernel at *any* step size:
/// every estimate equals `c·(b − a)`.
#[derive(Debug, Clone, Copy)]
pub struct ConstantKernel {
    pub value: f64,
}

impl ConstantKernel {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Exact integral over `[a, b]`.
    pub fn analytical_integral(&self, a: f64, b: f64) -> f64 {
        self.value * (b - a)
    }
}

impl Integrand for ConstantKernel {
    fn evaluate(&self, _x: f64) -> f64 {
        self.value
    }

    fn name(&self) -> &str {
        "Constant"
    }
}

// =================================================================================================
// Linear: f(x) = slope*x + intercept
// =================================================================================================

/// Linear kernel `f(x) = slope·x + intercept`.
///
/// Degree 1, so the trapezoidal rule has zero discretization error and an
/// adaptive run converges on its first refinement.
#[derive(Debug, Clone, Copy)]
pub struct LinearKernel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearKernel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Exact integral over `[a, b]`.
    pub fn analytical_integral(&self, a: f64, b: f64) -> f64 {
        0.5 * self.slope * (b * b - a * a) + self.intercept * (b - a)
    }
}

impl Integrand for LinearKernel {
    fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    fn name(&self) -> &str {
        "Linear"
    }
}

// =================================================================================================
// Monomial: f(x) = c * x^n
// =================================================================================================

/// Monomial kernel `f(x) = c·xⁿ`.
///
/// With `degree = 2` this is the classic probe for Richardson acceleration:
/// the raw trapezoidal estimate carries an O(h²) error, and a single
/// extrapolation level removes it completely.
#[derive(Debug, Clone, Copy)]
pub struct MonomialKernel {
    pub coefficient: f64,
    pub degree: u32,
}

impl MonomialKernel {
    pub fn new(coefficient: f64, degree: u32) -> Self {
        Self {
            coefficient,
            degree,
        }
    }

    /// Exact integral over `[a, b]`.
    pub fn analytical_integral(&self, a: f64, b: f64) -> f64 {
        let n = self.degree as i32;
        self.coefficient * (b.powi(n + 1) - a.powi(n + 1)) / (n + 1) as f64
    }
}

impl Integrand for MonomialKernel {
    fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * x.powi(self.degree as i32)
    }

    fn name(&self) -> &str {
        "Monomial"
    }
}
