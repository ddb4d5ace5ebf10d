//! Romberg quadrature via Richardson extrapolation
//!
//! # Mathematical Background
//!
//! The composite trapezoidal estimate `T(h)` of a smooth integrand has an
//! error expansion in even powers of the step size (Euler–Maclaurin):
//!
//! ```text
//! T(h) = I + c₁·h² + c₂·h⁴ + c₃·h⁶ + …
//! ```
//!
//! Romberg's method exploits this: compute `T(h)` on the geometric step
//! sequence `h₀, h₀/2, h₀/4, …` (each level reusing all previous grid points
//! and evaluating only the new midpoints), then fit the polynomial through
//! the points `(hₖ², T(hₖ))` and evaluate it at step zero. Because the error
//! is a polynomial in `h²`, extrapolating in the `h²` variable cancels the
//! leading error terms simultaneously: `m + 1` table entries yield an
//! estimate with error O(h^{2(m+1)}) — dramatically faster than the raw
//! rule's O(h²).
//!
//! # Algorithm
//!
//! 1. Level 0: elementary two-point trapezoid estimate, step `h₀ = b − a`.
//! 2. Each refinement: halve the step, add the new midpoint contributions,
//!    append `(hₖ, Tₖ)` to the table.
//! 3. Extrapolate the whole table to zero step size with Neville's scheme.
//! 4. Stop when the symmetric relative change between successive
//!    extrapolated values drops to the tolerance, or when the refinement
//!    ceiling is reached.
//!
//! The table is owned by the run and dropped when it returns; only the
//! scalar diagnostics survive in the [`QuadratureEstimate`].
//!
//! # Characteristics
//!
//! - **Order**: O(h^{2(m+1)}) with `m` refinement levels
//! - **Cost**: one evaluation per new midpoint, like plain refinement —
//!   the acceleration is free apart from the O(m²) extrapolation arithmetic
//! - **Memory**: O(m) for the table, bounded by the refinement ceiling
//!
//! # When to Use
//!
//! - Smooth integrands on a finite interval — the production method here
//! - Anything where evaluations are expensive and tolerances are tight
//!
//! # When NOT to Use
//!
//! - Integrands with discontinuities or integrable endpoint singularities:
//!   the error expansion above breaks down, and extrapolation can be
//!   confidently wrong. Use the plain adaptive trapezoid as a cross-check
//!   when in doubt.

use crate::integrand::Integrand;
use crate::quadrature::error::QuadratureResult;
use crate::quadrature::extrapolate::extrapolate_to_zero;
use crate::quadrature::interval::Interval;
use crate::quadrature::methods::trapezoid::{midpoint_sum, trapezoid_step};
use crate::quadrature::problem::Problem;
use crate::quadrature::traits::{
    Quadrature, QuadratureConfig, QuadratureEstimate, QuadratureStrategy,
};
use crate::quadrature::{check_finite, symmetric_relative_difference};

// =================================================================================================
// Refinement table
// =================================================================================================

/// Append-only table of one Romberg run: step sizes and the matching
/// trapezoidal estimates, one entry per refinement level.
///
/// Owned exclusively by the run that builds it; never shared, never shrunk.
struct RombergTable {
    /// Step size per level, `h_k = h_0 / 2^k`
    steps: Vec<f64>,

    /// Extrapolation nodes `h_k²` — the variable the trapezoidal error is
    /// polynomial in
    nodes: Vec<f64>,

    /// Composite trapezoidal estimate per level
    estimates: Vec<f64>,
}

impl RombergTable {
    fn with_level_zero(step: f64, estimate: f64) -> Self {
        Self {
            steps: vec![step],
            nodes: vec![step * step],
            estimates: vec![estimate],
        }
    }

    fn push(&mut self, step: f64, estimate: f64) {
        self.steps.push(step);
        self.nodes.push(step * step);
        self.estimates.push(estimate);
    }

    fn last_step(&self) -> f64 {
        *self.steps.last().expect("table is never empty")
    }

    fn last_estimate(&self) -> f64 {
        *self.estimates.last().expect("table is never empty")
    }

    /// Number of refinement levels performed (table length minus level 0).
    fn refinements(&self) -> usize {
        self.steps.len() - 1
    }

    /// Extrapolated value of the whole table at zero step size.
    fn accelerate(&self) -> QuadratureResult<f64> {
        extrapolate_to_zero(&self.nodes, &self.estimates)
    }
}

// =================================================================================================
// Romberg Rule
// =================================================================================================

/// Romberg quadrature method.
///
/// Inherently adaptive: only the
/// [`Adaptive`](QuadratureStrategy::Adaptive) strategy is supported, and a
/// fixed-step request is rejected as a configuration error.
///
/// # Example
///
/// ```rust
/// use ellint_rs::kernels::EllipticKernel;
/// use ellint_rs::quadrature::{Interval, Problem, Quadrature, QuadratureConfig, RombergRule};
/// use std::f64::consts::FRAC_PI_2;
///
/// let problem = Problem::new(
///     Box::new(EllipticKernel::new(0.0)),
///     Interval::new(0.0, FRAC_PI_2),
/// );
/// let config = QuadratureConfig::adaptive(1e-6, 40);
///
/// let estimate = RombergRule::new().integrate(&problem, &config).unwrap();
/// assert!(estimate.converged);
/// assert!((estimate.value - FRAC_PI_2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RombergRule;

impl RombergRule {
    /// Create a new Romberg method
    pub fn new() -> Self {
        Self
    }

    fn refine(
        &self,
        f: &dyn Integrand,
        interval: &Interval,
        relative_tolerance: f64,
        max_refinements: usize,
    ) -> QuadratureResult<QuadratureEstimate> {
        // ====== Level 0: elementary trapezoid step ======

        let h0 = interval.width();
        let mut table = RombergTable::with_level_zero(h0, trapezoid_step(f, interval));

        // The running accelerated value. At level 0 no extrapolation is
        // defined yet (a degree-0 "polynomial" is the estimate itself).
        let mut val = table.last_estimate();

        // Sentinel above the tolerance so the loop always refines at least
        // once — one table entry cannot support extrapolation.
        let mut diffrel = 2.0 * relative_tolerance;

        // ====== Refinement loop ======

        while diffrel > relative_tolerance && table.refinements() < max_refinements {
            let h = table.last_step();

            // New grid points are the midpoints of the current subintervals:
            // from a + h/2 to b − h/2, spaced by the old step h.
            let xa = interval.lower + 0.5 * h;
            let xe = interval.upper - 0.5 * h;

            // T(h/2) = ( T(h) + h·Σ f(midpoints) ) / 2 — only the new points
            // are evaluated, everything else is reused from the previous level.
            let refined = 0.5 * (table.last_estimate() + midpoint_sum(f, xa, xe, h));
            table.push(0.5 * h, refined);

            // Accelerate the whole table to zero step size.
            let val_new = table.accelerate()?;
            check_finite(val_new, table.refinements())?;

            diffrel = symmetric_relative_difference(val, val_new);
            val = val_new;

            log::debug!(
                "romberg level {}: h = {:e}, T = {:.16e}, accelerated = {:.16e}, diffrel = {:e}",
                table.refinements(),
                table.last_step(),
                table.last_estimate(),
                val,
                diffrel
            );
        }

        let converged = diffrel <= relative_tolerance;
        if !converged {
            log::warn!(
                "romberg hit the ceiling of {} refinements at relative change {:e} \
                 (requested {:e}); returning best estimate",
                max_refinements,
                diffrel,
                relative_tolerance
            );
        }

        Ok(QuadratureEstimate::new(
            val,
            table.refinements(),
            diffrel,
            converged,
        ))
    }
}

impl Quadrature for RombergRule {
    fn integrate(
        &self,
        problem: &Problem,
        config: &QuadratureConfig,
    ) -> QuadratureResult<QuadratureEstimate> {
        config.validate()?;
        problem.validate()?;

        let (relative_tolerance, max_refinements) = match &config.strategy {
            QuadratureStrategy::Adaptive {
                relative_tolerance,
                max_refinements,
            } => (*relative_tolerance, *max_refinements),
            other => {
                return Err(crate::quadrature::QuadratureError::config(format!(
                    "RombergRule only supports the Adaptive strategy, got {}",
                    other.name()
                )));
            }
        };

        let mut estimate = self.refine(
            problem.integrand.as_ref(),
            &problem.interval,
            relative_tolerance,
            max_refinements,
        )?;

        estimate.add_metadata("method", self.name());
        estimate.add_metadata("strategy", config.strategy.name());
        estimate.add_metadata("kernel", problem.integrand_name());
        estimate.add_metadata("relative_tolerance", &relative_tolerance.to_string());

        Ok(estimate)
    }

    fn name(&self) -> &'static str {
        "Romberg"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{ConstantKernel, EllipticKernel, LinearKernel, MonomialKernel};
    use crate::quadrature::QuadratureError;
    use std::f64::consts::FRAC_PI_2;

    fn adaptive() -> QuadratureConfig {
        QuadratureConfig::adaptive(1e-6, 40)
    }

    #[test]
    fn rejects_fixed_step_strategy() {
        let problem = Problem::new(Box::new(ConstantKernel::new(1.0)), Interval::new(0.0, 1.0));
        let result = RombergRule::new().integrate(&problem, &QuadratureConfig::fixed_step(8));
        assert!(matches!(
            result,
            Err(QuadratureError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn linear_kernel_is_exact_after_first_extrapolation() {
        // f(x) = x over [0, 2]: zero trapezoidal error at every level, so the
        // first refinement already agrees with level 0 and the run converges.
        let problem = Problem::new(
            Box::new(LinearKernel::new(1.0, 0.0)),
            Interval::new(0.0, 2.0),
        );
        let estimate = RombergRule::new().integrate(&problem, &adaptive()).unwrap();

        assert!(estimate.converged);
        assert_eq!(estimate.refinements, 1);
        assert_eq!(estimate.value, 2.0);
    }

    #[test]
    fn quadratic_kernel_is_exact_after_one_level() {
        // The O(h²) error of the trapezoidal rule on x² is removed completely
        // by a single Richardson level: two table entries suffice.
        let kernel = MonomialKernel::new(1.0, 2);
        let exact = kernel.analytical_integral(0.0, 1.0);
        let problem = Problem::new(Box::new(kernel), Interval::new(0.0, 1.0));

        let estimate = RombergRule::new().integrate(&problem, &adaptive()).unwrap();

        assert!(estimate.converged);
        assert!(
            (estimate.value - exact).abs() < 1e-14,
            "got {} for exact {}",
            estimate.value,
            exact
        );
    }

    #[test]
    fn cubic_kernel_is_exact_after_one_level() {
        // One Richardson level integrates polynomials through degree 3 exactly
        // (Simpson weights in disguise).
        let kernel = MonomialKernel::new(2.0, 3);
        let exact = kernel.analytical_integral(0.0, 2.0);
        let problem = Problem::new(Box::new(kernel), Interval::new(0.0, 2.0));

        let estimate = RombergRule::new().integrate(&problem, &adaptive()).unwrap();
        assert!((estimate.value - exact).abs() < 1e-12);
    }

    #[test]
    fn zero_modulus_elliptic_integral_is_half_pi() {
        let problem = Problem::new(
            Box::new(EllipticKernel::new(0.0)),
            Interval::new(0.0, FRAC_PI_2),
        );
        let estimate = RombergRule::new().integrate(&problem, &adaptive()).unwrap();

        assert!(estimate.converged);
        assert!((estimate.value - FRAC_PI_2).abs() < 1e-6);
        assert!(estimate.refinements <= 5);
    }

    #[test]
    fn runs_are_bit_identical() {
        let make_problem = || {
            Problem::new(
                Box::new(EllipticKernel::new(0.7)),
                Interval::new(0.0, FRAC_PI_2),
            )
        };

        let first = RombergRule::new()
            .integrate(&make_problem(), &adaptive())
            .unwrap();
        let second = RombergRule::new()
            .integrate(&make_problem(), &adaptive())
            .unwrap();

        assert_eq!(first.value.to_bits(), second.value.to_bits());
        assert_eq!(first.refinements, second.refinements);
        assert_eq!(
            first.achieved_rel_error.to_bits(),
            second.achieved_rel_error.to_bits()
        );
    }

    #[test]
    fn refinement_ceiling_returns_best_estimate() {
        let problem = Problem::new(
            Box::new(EllipticKernel::new(0.98)),
            Interval::new(0.0, FRAC_PI_2),
        );

        // One refinement cannot reach 1e-12 for a sharply peaked kernel.
        let estimate = RombergRule::new()
            .integrate(&problem, &QuadratureConfig::adaptive(1e-12, 1))
            .unwrap();

        assert!(!estimate.converged);
        assert_eq!(estimate.refinements, 1);
        assert!(estimate.value.is_finite());
    }

    #[test]
    fn out_of_domain_modulus_fails_before_evaluation() {
        let problem = Problem::new(
            Box::new(EllipticKernel::new(1.0)),
            Interval::new(0.0, FRAC_PI_2),
        );
        let result = RombergRule::new().integrate(&problem, &adaptive());
        assert!(matches!(result, Err(QuadratureError::Domain { .. })));
    }

    #[test]
    fn table_error_shrinks_towards_converged_value() {
        // Successive raw trapezoidal entries approach the accelerated value
        // monotonically in error magnitude.
        let kernel = EllipticKernel::new(0.5);
        let interval = Interval::new(0.0, FRAC_PI_2);

        let reference = RombergRule::new()
            .integrate(
                &Problem::new(Box::new(kernel), interval),
                &QuadratureConfig::adaptive(1e-12, 40),
            )
            .unwrap()
            .value;

        let mut h = interval.width();
        let mut estimate = trapezoid_step(&kernel, &interval);
        let mut previous_error = (estimate - reference).abs();
        for _ in 0..6 {
            let xa = interval.lower + 0.5 * h;
            let xe = interval.upper - 0.5 * h;
            estimate = 0.5 * (estimate + midpoint_sum(&kernel, xa, xe, h));
            h *= 0.5;

            let error = (estimate - reference).abs();
            // Once the error reaches the rounding floor of the reference
            // value itself, monotonicity is no longer meaningful.
            if previous_error > 1e-12 {
                assert!(
                    error <= previous_error,
                    "error grew from {} to {}",
                    previous_error,
                    error
                );
            }
            previous_error = error;
        }
    }
}
