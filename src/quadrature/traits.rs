//! Quadrature method traits and types
//!
//! # Design Philosophy
//!
//! - Central enum `QuadratureStrategy` defines the kind of run requested
//! - `QuadratureConfig` wraps the strategy and validates it
//! - `QuadratureEstimate` carries the numerical answer plus diagnostics
//! - The `Quadrature` trait is the stable interface every method implements
//!
//! A method checks that the strategy it was handed is one it supports
//! (Romberg, for example, is inherently adaptive and rejects fixed-step
//! requests) and returns an [`InvalidConfiguration`] error otherwise.
//!
//! [`InvalidConfiguration`]: crate::quadrature::QuadratureError::InvalidConfiguration

use crate::quadrature::error::{QuadratureError, QuadratureResult};
use crate::quadrature::problem::Problem;
use std::collections::HashMap;

// =================================================================================================
// Central Strategy Enumeration
// =================================================================================================

/// Kind of quadrature run requested.
///
/// Each variant carries the parameters specific to that kind of run.
#[derive(Clone, Debug, PartialEq)]
pub enum QuadratureStrategy {
    /// Single composite pass over a uniform grid.
    ///
    /// # Parameters
    /// - `subdivisions`: number of equal subintervals (grid has
    ///   `subdivisions + 1` points)
    FixedStep { subdivisions: usize },

    /// Successive step halving until the symmetric relative change between
    /// consecutive estimates drops to the tolerance.
    ///
    /// # Parameters
    /// - `relative_tolerance`: stopping threshold on the relative change
    /// - `max_refinements`: safety ceiling on the number of halvings
    Adaptive {
        relative_tolerance: f64,
        max_refinements: usize,
    },
}

impl QuadratureStrategy {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            QuadratureStrategy::FixedStep { .. } => "FixedStep",
            QuadratureStrategy::Adaptive { .. } => "Adaptive",
        }
    }

    /// Validate that parameters are numerically meaningful
    pub fn validate(&self) -> QuadratureResult<()> {
        match self {
            QuadratureStrategy::FixedStep { subdivisions } => {
                if *subdivisions == 0 {
                    return Err(QuadratureError::config(
                        "subdivisions must be greater than 0",
                    ));
                }
                Ok(())
            }
            QuadratureStrategy::Adaptive {
                relative_tolerance,
                max_refinements,
            } => {
                if !relative_tolerance.is_finite() || *relative_tolerance <= 0.0 {
                    return Err(QuadratureError::config(format!(
                        "relative tolerance must be positive and finite, got {}",
                        relative_tolerance
                    )));
                }
                if *max_refinements == 0 {
                    return Err(QuadratureError::config(
                        "maximum refinements must be positive",
                    ));
                }
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Quadrature configuration
// =================================================================================================

/// Configuration for a quadrature run
///
/// Contains the `QuadratureStrategy` which defines what kind of run we want.
///
/// # Examples
///
/// ```rust
/// use ellint_rs::quadrature::QuadratureConfig;
///
/// // Adaptive run: tolerance 1e-6, at most 40 halvings
/// let config = QuadratureConfig::adaptive(1e-6, 40);
/// assert!(config.validate().is_ok());
///
/// // Fixed grid with 128 subintervals
/// let config = QuadratureConfig::fixed_step(128);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QuadratureConfig {
    /// Strategy and its parameters
    pub strategy: QuadratureStrategy,
}

impl QuadratureConfig {
    /// Create a new configuration with a given strategy
    pub fn new(strategy: QuadratureStrategy) -> Self {
        Self { strategy }
    }

    /// Create a fixed-step configuration
    pub fn fixed_step(subdivisions: usize) -> Self {
        Self::new(QuadratureStrategy::FixedStep { subdivisions })
    }

    /// Create an adaptive configuration
    pub fn adaptive(relative_tolerance: f64, max_refinements: usize) -> Self {
        Self::new(QuadratureStrategy::Adaptive {
            relative_tolerance,
            max_refinements,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> QuadratureResult<()> {
        self.strategy.validate()
    }
}

// =================================================================================================
// Quadrature estimate (run output)
// =================================================================================================

/// Result of one quadrature run.
///
/// Carries the estimate itself plus the diagnostics a caller needs to judge
/// it: how many refinement levels were spent, what relative change the last
/// level achieved, and whether the stopping rule was actually met.
///
/// `converged == false` is a *soft* outcome: the value is the best estimate
/// available when the refinement ceiling was hit, and
/// `achieved_rel_error` tells the caller how far the run still was from the
/// requested tolerance.
#[derive(Clone, Debug)]
pub struct QuadratureEstimate {
    /// The integral estimate
    pub value: f64,

    /// Number of refinement levels performed (0 for a fixed-step run)
    pub refinements: usize,

    /// Symmetric relative change between the last two accelerated estimates
    pub achieved_rel_error: f64,

    /// Whether the stopping rule was met within the refinement ceiling
    pub converged: bool,

    /// Diagnostic metadata (method name, strategy parameters, ...)
    metadata: HashMap<String, String>,
}

impl QuadratureEstimate {
    /// Create an estimate with empty metadata
    pub fn new(value: f64, refinements: usize, achieved_rel_error: f64, converged: bool) -> Self {
        Self {
            value,
            refinements,
            achieved_rel_error,
            converged,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata for diagnostics and reproducibility
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }
}

// =================================================================================================
// Quadrature trait
// =================================================================================================

/// Stable interface for all quadrature methods.
///
/// # Implementing a New Method
///
/// ```rust
/// use ellint_rs::integrand::Integrand;
/// use ellint_rs::quadrature::{
///     Problem, Quadrature, QuadratureConfig, QuadratureEstimate, QuadratureResult,
/// };
///
/// pub struct MidpointRule;
///
/// impl Quadrature for MidpointRule {
///     fn integrate(
///         &self,
///         problem: &Problem,
///         config: &QuadratureConfig,
///     ) -> QuadratureResult<QuadratureEstimate> {
///         // 1. Validate configuration and problem
///         config.validate()?;
///         problem.validate()?;
///
///         // 2. Apply your scheme
///         let mid = 0.5 * (problem.interval.lower + problem.interval.upper);
///         let value = problem.integrand.evaluate(mid) * problem.interval.width();
///
///         // 3. Build and return the estimate
///         Ok(QuadratureEstimate::new(value, 0, f64::NAN, true))
///     }
///
///     fn name(&self) -> &str {
///         "Midpoint"
///     }
/// }
/// ```
pub trait Quadrature {
    /// Evaluate the problem's integral under the given configuration.
    fn integrate(
        &self,
        problem: &Problem,
        config: &QuadratureConfig,
    ) -> QuadratureResult<QuadratureEstimate>;

    /// Method name, used in diagnostics and result metadata.
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_requires_subdivisions() {
        assert!(QuadratureConfig::fixed_step(1).validate().is_ok());
        assert!(QuadratureConfig::fixed_step(0).validate().is_err());
    }

    #[test]
    fn adaptive_requires_positive_tolerance() {
        assert!(QuadratureConfig::adaptive(1e-6, 40).validate().is_ok());
        assert!(QuadratureConfig::adaptive(0.0, 40).validate().is_err());
        assert!(QuadratureConfig::adaptive(-1e-6, 40).validate().is_err());
        assert!(QuadratureConfig::adaptive(f64::NAN, 40).validate().is_err());
    }

    #[test]
    fn adaptive_requires_refinement_budget() {
        assert!(QuadratureConfig::adaptive(1e-6, 0).validate().is_err());
    }

    #[test]
    fn strategy_names() {
        assert_eq!(QuadratureConfig::fixed_step(8).strategy.name(), "FixedStep");
        assert_eq!(
            QuadratureConfig::adaptive(1e-6, 40).strategy.name(),
            "Adaptive"
        );
    }

    #[test]
    fn estimate_metadata_round_trip() {
        let mut estimate = QuadratureEstimate::new(1.0, 3, 1e-8, true);
        estimate.add_metadata("method", "Romberg");
        assert_eq!(estimate.metadata("method"), Some("Romberg"));
        assert_eq!(estimate.metadata("missing"), None);
    }
}
