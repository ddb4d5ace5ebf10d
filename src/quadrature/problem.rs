//! Quadrature problem definition
//!
//! A problem combines an integrand with an integration interval.

use crate::integrand::Integrand;
use crate::quadrature::error::QuadratureResult;
use crate::quadrature::interval::Interval;

/// Quadrature problem
///
/// Defines a specific integral to evaluate:
/// - Integrand (the function)
/// - Interval (the bounds)
///
/// # Design
///
/// The same problem can be handed to different quadrature methods.
/// This is the "WHAT to integrate" (not "HOW to integrate").
///
/// # Examples
///
/// ```rust
/// use ellint_rs::kernels::EllipticKernel;
/// use ellint_rs::quadrature::{Interval, Problem};
/// use std::f64::consts::FRAC_PI_2;
///
/// let problem = Problem::new(
///     Box::new(EllipticKernel::new(0.5)),
///     Interval::new(0.0, FRAC_PI_2),
/// );
/// assert!(problem.validate().is_ok());
/// ```
pub struct Problem {
    /// Integrand (the function)
    pub integrand: Box<dyn Integrand>,

    /// Integration bounds
    pub interval: Interval,
}

impl Problem {
    /// Create a problem
    pub fn new(integrand: Box<dyn Integrand>, interval: Interval) -> Self {
        Self {
            integrand,
            interval,
        }
    }

    /// Verify problem content: interval bounds first, then the kernel's own
    /// parameter domain.
    pub fn validate(&self) -> QuadratureResult<()> {
        self.interval.validate()?;
        self.integrand.validate()
    }

    /// Get kernel name
    pub fn integrand_name(&self) -> &str {
        self.integrand.name()
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("integrand", &self.integrand_name())
            .field("interval", &self.interval)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
