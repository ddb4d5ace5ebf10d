//! Modulus parameter sweep
//!
//! Evaluates the complete elliptic integral `K(z)` over a linear grid of
//! moduli, one independent Romberg run per grid point.
//!
//! # Design
//!
//! Sweep points share nothing: each run owns its refinement table and is a
//! pure function of `(z, interval, config)`, so records come out in grid
//! order and re-running a sweep reproduces it bit for bit. A point that
//! exhausts its refinement budget is recorded with `converged == false`
//! (and a warning is logged by the method); it never aborts the rest of the
//! sweep. Only hard errors — an invalid interval, a modulus outside
//! `|z| < 1` — stop a sweep, and those are caught up front by validation.
//!
//! # Example
//!
//! ```rust
//! use ellint_rs::quadrature::{Interval, QuadratureConfig};
//! use ellint_rs::sweep::ModulusSweep;
//! use std::f64::consts::FRAC_PI_2;
//!
//! // 11 moduli from 0 to 0.5
//! let sweep = ModulusSweep::new(0.0, 0.5, 10);
//! let records = sweep
//!     .run(&Interval::new(0.0, FRAC_PI_2), &QuadratureConfig::adaptive(1e-6, 40))
//!     .unwrap();
//!
//! assert_eq!(records.len(), 11);
//! assert!((records[0].value - FRAC_PI_2).abs() < 1e-6);
//! ```

use crate::kernels::EllipticKernel;
use crate::quadrature::{
    Interval, Problem, Quadrature, QuadratureConfig, QuadratureError, QuadratureResult,
    RombergRule,
};
use nalgebra::DVector;
use std::f64::consts::FRAC_PI_2;

// =================================================================================================
// Sweep Record
// =================================================================================================

/// One row of sweep output: the accelerated estimate for a single modulus
/// plus the diagnostics of the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRecord {
    /// Modulus `z` of this grid point
    pub modulus: f64,

    /// Accelerated integral estimate `K(z)`
    pub value: f64,

    /// Refinement levels spent on this point
    pub refinements: usize,

    /// Relative change achieved by the final refinement
    pub achieved_rel_error: f64,

    /// Whether the run met its tolerance within the refinement ceiling
    pub converged: bool,
}

// =================================================================================================
// Modulus Sweep
// =================================================================================================

/// Linear modulus grid `z_min, …, z_max` with `znum + 1` points.
///
/// The default matches the classical study of `K(z)`: 101 points from 0 to
/// 0.98 over `[0, π/2]`. The upper bound stays strictly below 1 because the
/// kernel develops a singularity there (see
/// [`EllipticKernel`](crate::kernels::EllipticKernel)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulusSweep {
    /// First modulus of the grid
    pub z_min: f64,

    /// Last modulus of the grid
    pub z_max: f64,

    /// Number of grid *steps*; the grid has `znum + 1` points
    pub znum: usize,
}

impl Default for ModulusSweep {
    fn default() -> Self {
        Self {
            z_min: 0.0,
            z_max: 0.98,
            znum: 100,
        }
    }
}

impl ModulusSweep {
    /// Create a sweep over `[z_min, z_max]` with `znum + 1` points.
    pub fn new(z_min: f64, z_max: f64, znum: usize) -> Self {
        Self { z_min, z_max, znum }
    }

    /// The integration interval of the defining integral, `[0, π/2]`.
    pub fn standard_interval() -> Interval {
        Interval::new(0.0, FRAC_PI_2)
    }

    /// Check that the grid is well-formed and stays inside the kernel domain.
    pub fn validate(&self) -> QuadratureResult<()> {
        if !self.z_min.is_finite() || !self.z_max.is_finite() || self.z_min >= self.z_max {
            return Err(QuadratureError::config(format!(
                "modulus range [{}, {}] must be finite with z_min < z_max",
                self.z_min, self.z_max
            )));
        }
        if self.z_min.abs() >= 1.0 || self.z_max.abs() >= 1.0 {
            return Err(QuadratureError::domain(format!(
                "modulus range [{}, {}] leaves the kernel domain |z| < 1",
                self.z_min, self.z_max
            )));
        }
        if self.znum == 0 {
            return Err(QuadratureError::config(
                "znum must be at least 1 (grid has znum + 1 points)",
            ));
        }
        Ok(())
    }

    /// The grid values, in increasing order.
    pub fn values(&self) -> DVector<f64> {
        let step = (self.z_max - self.z_min) / self.znum as f64;
        DVector::from_fn(self.znum + 1, |i, _| self.z_min + step * i as f64)
    }

    /// Run the full Romberg procedure for every grid point.
    ///
    /// Returns one [`SweepRecord`] per modulus, ordered by increasing `z`.
    pub fn run(
        &self,
        interval: &Interval,
        config: &QuadratureConfig,
    ) -> QuadratureResult<Vec<SweepRecord>> {
        self.validate()?;
        config.validate()?;
        interval.validate()?;

        let method = RombergRule::new();
        let mut records = Vec::with_capacity(self.znum + 1);

        for z in self.values().iter() {
            let problem = Problem::new(Box::new(EllipticKernel::new(*z)), *interval);
            let estimate = method.integrate(&problem, config)?;

            records.push(SweepRecord {
                modulus: *z,
                value: estimate.value,
                refinements: estimate.refinements,
                achieved_rel_error: estimate.achieved_rel_error,
                converged: estimate.converged,
            });
        }

        Ok(records)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classical_study() {
        let sweep = ModulusSweep::default();
        assert_eq!(sweep.z_min, 0.0);
        assert_eq!(sweep.z_max, 0.98);
        assert_eq!(sweep.znum, 100);
        assert!(sweep.validate().is_ok());
    }

    #[test]
    fn grid_has_znum_plus_one_points_with_exact_ends() {
        let sweep = ModulusSweep::new(0.0, 0.98, 100);
        let values = sweep.values();

        assert_eq!(values.len(), 101);
        assert_eq!(values[0], 0.0);
        assert!((values[100] - 0.98).abs() < 1e-12);

        // Strictly increasing
        for i in 1..values.len() {
            assert!(values[i] > values[i - 1]);
        }
    }

    #[test]
    fn validate_rejects_degenerate_ranges() {
        assert!(ModulusSweep::new(0.5, 0.5, 10).validate().is_err());
        assert!(ModulusSweep::new(0.9, 0.1, 10).validate().is_err());
        assert!(ModulusSweep::new(f64::NAN, 0.5, 10).validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_domain_moduli() {
        let result = ModulusSweep::new(0.0, 1.0, 10).validate();
        assert!(matches!(result, Err(QuadratureError::Domain { .. })));
        assert!(ModulusSweep::new(-1.2, 0.5, 10).validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_steps() {
        assert!(ModulusSweep::new(0.0, 0.5, 0).validate().is_err());
    }

    #[test]
    fn small_sweep_produces_ordered_converged_records() {
        let sweep = ModulusSweep::new(0.0, 0.9, 9);
        let records = sweep
            .run(
                &ModulusSweep::standard_interval(),
                &QuadratureConfig::adaptive(1e-6, 40),
            )
            .unwrap();

        assert_eq!(records.len(), 10);
        for record in &records {
            assert!(record.converged);
            assert!(record.value.is_finite());
        }

        // K(z) grows with the modulus
        for i in 1..records.len() {
            assert!(records[i].value > records[i - 1].value);
            assert!(records[i].modulus > records[i - 1].modulus);
        }

        // K(0) = π/2
        assert!((records[0].value - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn sweep_is_reproducible() {
        let sweep = ModulusSweep::new(0.0, 0.5, 5);
        let interval = ModulusSweep::standard_interval();
        let config = QuadratureConfig::adaptive(1e-8, 40);

        let first = sweep.run(&interval, &config).unwrap();
        let second = sweep.run(&interval, &config).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.value.to_bits(), b.value.to_bits());
            assert_eq!(a.refinements, b.refinements);
        }
    }
}
