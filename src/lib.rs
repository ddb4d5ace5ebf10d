//! ellint-rs: Romberg Quadrature for Complete Elliptic Integrals
//!
//! A small framework for evaluating the complete elliptic integral of the
//! first kind,
//!
//! ```text
//! K(z) = ∫₀^{π/2} dx / sqrt(1 − z²·sin²x),      |z| < 1
//! ```
//!
//! over sweeps of the modulus `z`, built around composite trapezoidal
//! quadrature and its Richardson/Romberg acceleration.
//!
//! # Architecture
//!
//! ellint-rs is built on two core principles:
//!
//! 1. **Separation of Function and Method**
//!    - Integrand kernels define function values (what to integrate)
//!    - Quadrature methods provide the scheme (how to integrate)
//!
//! 2. **Diagnosable Results**
//!    - Every estimate carries its refinement count, achieved relative
//!      change, and convergence flag
//!    - Running out of refinement budget is a reported outcome, not a crash
//!
//! # Quick Start
//!
//! ```rust
//! use ellint_rs::prelude::*;
//! use std::f64::consts::FRAC_PI_2;
//!
//! # fn main() -> Result<(), QuadratureError> {
//! // 1. Define the problem: K(0.5) over [0, π/2]
//! let problem = Problem::new(
//!     Box::new(EllipticKernel::new(0.5)),
//!     Interval::new(0.0, FRAC_PI_2),
//! );
//!
//! // 2. Configure the run: tolerance 1e-6, at most 40 halvings
//! let config = QuadratureConfig::adaptive(1e-6, 40);
//!
//! // 3. Integrate
//! let estimate = RombergRule::new().integrate(&problem, &config)?;
//!
//! // 4. Access results
//! assert!(estimate.converged);
//! println!("K(0.5) = {:.12} ({} refinements)", estimate.value, estimate.refinements);
//! # Ok(())
//! # }
//! ```
//!
//! Or sweep the whole modulus range at once:
//!
//! ```rust
//! use ellint_rs::prelude::*;
//!
//! # fn main() -> Result<(), QuadratureError> {
//! let records = ModulusSweep::default().run(
//!     &ModulusSweep::standard_interval(),
//!     &QuadratureConfig::adaptive(1e-6, 40),
//! )?;
//! assert_eq!(records.len(), 101);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`integrand`]: the [`Integrand`](integrand::Integrand) trait (functions)
//! - [`kernels`]: concrete kernels (elliptic, polynomial)
//! - [`quadrature`]: methods, configuration, results, errors
//! - [`sweep`]: modulus parameter sweep
//! - [`output`]: plotting and CSV export

// Core modules
pub mod integrand;
pub mod kernels;
pub mod quadrature;
pub mod sweep;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use ellint_rs::prelude::*;
    //! ```
    pub use crate::integrand::Integrand;
    pub use crate::kernels::{ConstantKernel, EllipticKernel, LinearKernel, MonomialKernel};
    pub use crate::quadrature::{
        Interval, Problem, Quadrature, QuadratureConfig, QuadratureError, QuadratureEstimate,
        QuadratureResult, QuadratureStrategy, RombergRule, TrapezoidRule,
    };
    pub use crate::sweep::{ModulusSweep, SweepRecord};
}
