//! Numerical quadrature
//!
//! This module provides traits and implementations for quadrature methods.
//! A quadrature method applies a numerical integration scheme to the
//! function provided by an integrand within a specific problem.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The quadrature architecture separates concerns into three layers:
//!
//! 1. **Problem** ([`Problem`]) - WHAT to integrate
//!    - Integrand (the function kernel)
//!    - Interval (the bounds)
//!
//! 2. **Configuration** ([`QuadratureConfig`]) - HOW to integrate
//!    - Strategy (fixed-step or adaptive)
//!    - Numerical parameters (subdivisions, tolerance, refinement ceiling)
//!
//! 3. **Method** ([`Quadrature`] trait) - The numerical scheme
//!    - Applies the integration rule
//!    - Returns the estimate with diagnostics
//!    - Independent of any particular kernel
//!
//! This separation allows:
//! - Same method for different kernels
//! - Different methods for the same problem
//! - Easy benchmarking and method comparison
//!
//! # Module Organization
//!
//! - **`traits`**: Core trait definitions and types
//!   - [`Quadrature`] trait: stable interface for all methods
//!   - [`QuadratureStrategy`]: enumeration of run kinds
//!   - [`QuadratureConfig`]: configuration structure
//!   - [`QuadratureEstimate`]: result structure
//!
//! - **`interval`**: Integration bounds
//! - **`problem`**: Problem definition (kernel + interval)
//! - **`extrapolate`**: Neville extrapolation to zero step size
//! - **`error`**: Error types
//!
//! - **Method implementations** (`methods`):
//!   - [`TrapezoidRule`]: composite trapezoidal rule
//!   - [`RombergRule`]: Richardson-accelerated refinement
//!
//! # Quick Start Example
//!
//! ```rust
//! use ellint_rs::kernels::EllipticKernel;
//! use ellint_rs::quadrature::{
//!     Interval, Problem, Quadrature, QuadratureConfig, RombergRule,
//! };
//! use std::f64::consts::FRAC_PI_2;
//!
//! // 1. Create the problem (WHAT to integrate)
//! let problem = Problem::new(
//!     Box::new(EllipticKernel::new(0.5)),
//!     Interval::new(0.0, FRAC_PI_2),
//! );
//!
//! // 2. Create the configuration (HOW to integrate)
//! let config = QuadratureConfig::adaptive(
//!     1e-6,   // relative tolerance
//!     40,     // refinement ceiling
//! );
//!
//! // 3. Create the method and integrate
//! let estimate = RombergRule::new().integrate(&problem, &config)?;
//!
//! // 4. Access the result
//! assert!(estimate.converged);
//! println!("K(0.5) ≈ {} after {} refinements", estimate.value, estimate.refinements);
//! # Ok::<(), ellint_rs::quadrature::QuadratureError>(())
//! ```
//!
//! # Error Handling
//!
//! Hard failures (bad configuration, out-of-domain kernel, degenerate
//! extrapolation nodes, non-finite estimates) are returned as
//! [`QuadratureError`]. Running out of refinement budget is *not* a hard
//! failure: the estimate comes back with `converged == false` and the
//! diagnostics needed to judge it. See [`error`] for the full catalogue.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod error;
mod extrapolate;
mod interval;
mod methods;
mod problem;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use error::{QuadratureError, QuadratureResult};
pub use interval::Interval;
pub use problem::Problem;
pub use traits::{Quadrature, QuadratureConfig, QuadratureEstimate, QuadratureStrategy};

pub use methods::{RombergRule, TrapezoidRule};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Symmetric relative difference between successive estimates:
/// `2·|old − new| / (|old| + |new|)`.
///
/// The symmetric form is robust to either value being near zero — unless
/// both are. The guards:
/// - both exactly zero: the estimates agree perfectly, difference is 0;
/// - denominator below machine epsilon (opposite-sign cancellation): the
///   ratio would explode meaninglessly, so fall back to the absolute
///   difference instead of propagating an effectively infinite value.
pub(crate) fn symmetric_relative_difference(old: f64, new: f64) -> f64 {
    let denominator = old.abs() + new.abs();
    if denominator == 0.0 {
        return 0.0;
    }

    let difference = (old - new).abs();
    if denominator < f64::EPSILON {
        return difference;
    }

    2.0 * difference / denominator
}

/// Check an estimate for numerical issues.
///
/// NaN or infinity in an estimate means the integrand was evaluated where it
/// is not defined (or overflowed); failing here, with the refinement level
/// attached, beats letting the value poison every later extrapolation.
pub(crate) fn check_finite(value: f64, level: usize) -> QuadratureResult<()> {
    if !value.is_finite() {
        return Err(QuadratureError::NonFinite { level });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
