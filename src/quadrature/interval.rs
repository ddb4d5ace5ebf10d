//! Integration interval
//!
//! The one-dimensional analog of a domain definition: two real bounds with
//! `lower < upper`, fixed for the duration of one quadrature run.

use crate::quadrature::error::{QuadratureError, QuadratureResult};
use std::fmt;

/// Closed integration interval `[lower, upper]`.
///
/// # Examples
///
/// ```rust
/// use ellint_rs::quadrature::Interval;
/// use std::f64::consts::FRAC_PI_2;
///
/// let interval = Interval::new(0.0, FRAC_PI_2);
/// assert!(interval.validate().is_ok());
/// assert!((interval.width() - FRAC_PI_2).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound `a`
    pub lower: f64,

    /// Upper bound `b`
    pub upper: f64,
}

impl Interval {
    /// Create an interval. Bounds are checked by [`validate`](Self::validate),
    /// not here, so configuration errors surface with context at run start.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Check that both bounds are finite and `lower < upper`.
    ///
    /// A degenerate interval (`lower == upper`) is rejected: every estimate
    /// over it is 0 by the trapezoidal formula, and the symmetric relative
    /// stopping rule has no information to work with.
    pub fn validate(&self) -> QuadratureResult<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower >= self.upper {
            return Err(QuadratureError::InvalidInterval {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    /// Interval width `b − a`; the level-0 step size of a refinement run.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
