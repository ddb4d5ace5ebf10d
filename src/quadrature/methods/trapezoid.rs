//! Composite trapezoidal quadrature
//!
//! # Mathematical Background
//!
//! The trapezoidal rule approximates an integral by the area under the
//! piecewise-linear interpolant of the integrand on a uniform grid:
//!
//! ```text
//! ∫ₐᵇ f(x) dx ≈ h · ( f(a)/2 + f(a+h) + … + f(b−h) + f(b)/2 )
//! ```
//!
//! The discretization error is O(h²) for smooth integrands, and — crucially
//! for Richardson acceleration — its expansion contains only *even* powers
//! of `h` (Euler–Maclaurin).
//!
//! # Incremental Refinement
//!
//! Halving the step size keeps every existing grid point and introduces the
//! midpoints of the old subintervals. The composite sum at the new step
//! therefore needs only the new midpoint evaluations:
//!
//! ```text
//! T(h/2) = ( T(h) + h · Σ f(midpoints) ) / 2
//! ```
//!
//! Each refinement level costs one function evaluation per *new* point, so
//! reaching level `n` costs O(2ⁿ) evaluations in total — the same as a direct
//! evaluation at the finest grid, with nothing computed twice.
//!
//! # Characteristics
//!
//! - **Order**: second-order accurate (error ~ O(h²))
//! - **Cost**: one evaluation per grid point, midpoints only when refining
//! - **Memory**: O(1) — only the running estimate is kept
//!
//! # When to Use
//!
//! - Baseline and sanity checks against accelerated methods
//! - Integrands too rough for polynomial extrapolation to help
//! - Quick estimates where O(h²) is accurate enough
//!
//! For smooth integrands the Romberg method reaches the same accuracy with
//! far fewer refinement levels; see
//! [`RombergRule`](crate::quadrature::RombergRule).

use crate::integrand::Integrand;
use crate::quadrature::error::QuadratureResult;
use crate::quadrature::interval::Interval;
use crate::quadrature::problem::Problem;
use crate::quadrature::traits::{
    Quadrature, QuadratureConfig, QuadratureEstimate, QuadratureStrategy,
};
use crate::quadrature::{check_finite, symmetric_relative_difference};

// =================================================================================================
// Elementary building blocks (shared with the Romberg driver)
// =================================================================================================

/// Elementary trapezoid step: the two-point estimate `h/2 · (f(a) + f(b))`
/// with `h = b − a`. This is the level-0 entry of every refinement table.
///
/// A degenerate interval (`a == b`) yields 0 by the formula itself.
pub(crate) fn trapezoid_step(f: &dyn Integrand, interval: &Interval) -> f64 {
    0.5 * interval.width() * (f.evaluate(interval.lower) + f.evaluate(interval.upper))
}

/// Sum of `f` over the uniform grid `xa, xa + h, …, xe` (both ends
/// inclusive), scaled by `h`.
///
/// Called with the midpoint grid of a refinement level: `xa = a + h/2`,
/// `xe = b − h/2`, spacing equal to the *previous* level's step `h`. The grid
/// point count comes from integer division; a floating-point residue at the
/// boundary is tolerated since both endpoints are included explicitly.
pub(crate) fn midpoint_sum(f: &dyn Integrand, xa: f64, xe: f64, h: f64) -> f64 {
    let nstep = ((xe - xa) / h) as usize;

    let mut tsum = 0.0;
    for i in 0..=nstep {
        // Grid point from the index, not by repeated addition: accumulating
        // `x += h` drifts by ~1e-14 over a few hundred points, enough to
        // push the last point past `xe`.
        let x = xa + i as f64 * h;
        tsum += f.evaluate(x);
    }

    tsum * h
}

// =================================================================================================
// Trapezoid Rule
// =================================================================================================

/// Composite trapezoidal quadrature method.
///
/// Supports both strategies:
/// - [`FixedStep`](QuadratureStrategy::FixedStep): one composite pass over a
///   uniform grid with the requested number of subintervals.
/// - [`Adaptive`](QuadratureStrategy::Adaptive): successive step halving with
///   incremental midpoint reuse, stopping on the symmetric relative change —
///   refinement *without* extrapolation, the natural baseline for Romberg.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapezoidRule;

impl TrapezoidRule {
    /// Create a new trapezoid method
    pub fn new() -> Self {
        Self
    }

    /// Fixed-step composite pass with `subdivisions` equal subintervals.
    fn fixed_step(&self, f: &dyn Integrand, interval: &Interval, subdivisions: usize) -> f64 {
        let h = interval.width() / subdivisions as f64;

        let mut sum = 0.5 * (f.evaluate(interval.lower) + f.evaluate(interval.upper));
        for i in 1..subdivisions {
            sum += f.evaluate(interval.lower + i as f64 * h);
        }

        sum * h
    }

    /// Adaptive halving loop with incremental midpoint reuse.
    fn refine(
        &self,
        f: &dyn Integrand,
        interval: &Interval,
        relative_tolerance: f64,
        max_refinements: usize,
    ) -> QuadratureResult<QuadratureEstimate> {
        let mut h = interval.width();
        let mut val = trapezoid_step(f, interval);
        let mut refinements = 0;

        // Sentinel above the tolerance so the loop always refines at least once.
        let mut diffrel = 2.0 * relative_tolerance;

        while diffrel > relative_tolerance && refinements < max_refinements {
            // New grid points are the midpoints of the current subintervals:
            // from a + h/2 to b − h/2, spaced by the *old* step h.
            let xa = interval.lower + 0.5 * h;
            let xe = interval.upper - 0.5 * h;

            // T(h/2) = ( T(h) + h·Σ f(midpoints) ) / 2
            let val_new = 0.5 * (val + midpoint_sum(f, xa, xe, h));
            h *= 0.5;

            refinements += 1;
            check_finite(val_new, refinements)?;

            diffrel = symmetric_relative_difference(val, val_new);
            val = val_new;

            log::trace!(
                "trapezoid refinement {}: h = {:e}, estimate = {:.16e}, diffrel = {:e}",
                refinements,
                h,
                val,
                diffrel
            );
        }

        let converged = diffrel <= relative_tolerance;
        if !converged {
            log::warn!(
                "trapezoid refinement hit the ceiling of {} levels at relative change {:e} \
                 (requested {:e}); returning best estimate",
                max_refinements,
                diffrel,
                relative_tolerance
            );
        }

        Ok(QuadratureEstimate::new(val, refinements, diffrel, converged))
    }
}

impl Quadrature for TrapezoidRule {
    fn integrate(
        &self,
        problem: &Problem,
        config: &QuadratureConfig,
    ) -> QuadratureResult<QuadratureEstimate> {
        config.validate()?;
        problem.validate()?;

        let f = problem.integrand.as_ref();

        let mut estimate = match &config.strategy {
            QuadratureStrategy::FixedStep { subdivisions } => {
                let value = self.fixed_step(f, &problem.interval, *subdivisions);
                check_finite(value, 0)?;

                // A single pass has no successive estimates to compare, so the
                // achieved relative change is not applicable.
                let mut estimate = QuadratureEstimate::new(value, 0, f64::NAN, true);
                estimate.add_metadata("subdivisions", &subdivisions.to_string());
                estimate
            }
            QuadratureStrategy::Adaptive {
                relative_tolerance,
                max_refinements,
            } => {
                let mut estimate =
                    self.refine(f, &problem.interval, *relative_tolerance, *max_refinements)?;
                estimate.add_metadata("relative_tolerance", &relative_tolerance.to_string());
                estimate
            }
        };

        estimate.add_metadata("method", self.name());
        estimate.add_metadata("strategy", config.strategy.name());
        estimate.add_metadata("kernel", problem.integrand_name());

        Ok(estimate)
    }

    fn name(&self) -> &'static str {
        "Trapezoid"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
