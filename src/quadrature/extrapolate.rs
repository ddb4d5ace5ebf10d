//! Polynomial extrapolation to zero abscissa
//!
//! # Mathematical Background
//!
//! Given nodes `x₀ > x₁ > … > xₘ` with ordinates `y₀ … yₘ`, Neville's scheme
//! evaluates the unique degree-`m` interpolating polynomial at a target point
//! without ever forming its coefficients. Specialized to target `0`, the
//! in-place recursion over a working copy of the ordinates is
//!
//! ```text
//! for k = 1..=m:
//!     for i = m down to k:
//!         y[i] ← y[i] + (y[i] − y[i−1]) · x[i] / (x[i−k] − x[i])
//! ```
//!
//! running `i` from the top down so that the `y[i−1]` each update reads is
//! still the value from the previous column. After the final column `y[m]`
//! holds `p(0)`.
//!
//! # Role in Romberg Integration
//!
//! The trapezoidal error expands in even powers of the step size, so the
//! Romberg driver hands this routine nodes `xₖ = hₖ²` rather than `hₖ`.
//! Extrapolating that sequence to `x = 0` cancels the h², h⁴, … error terms
//! simultaneously: with `m + 1` table entries the result converges like
//! O(h^{2(m+1)}) instead of the raw rule's O(h²).

use crate::quadrature::error::{QuadratureError, QuadratureResult};
use nalgebra::DVector;

/// Evaluate at `0` the polynomial interpolating `(nodes[i], ordinates[i])`.
///
/// Exact interpolation is the contract: if the ordinates already lie on a
/// polynomial of degree <= `nodes.len() - 1`, the returned value is that
/// polynomial at zero, up to rounding.
///
/// # Errors
///
/// [`QuadratureError::DivisionByZero`] when two nodes coincide — the
/// interpolating polynomial is not unique through repeated abscissae. The
/// geometric step sequence of a Romberg run can never trigger this; the guard
/// exists so degenerate input fails loudly instead of dividing by zero.
///
/// # Panics
///
/// Debug builds assert that the two slices have equal, nonzero length; the
/// caller (the Romberg table) grows them in lockstep.
pub(crate) fn extrapolate_to_zero(nodes: &[f64], ordinates: &[f64]) -> QuadratureResult<f64> {
    debug_assert!(!nodes.is_empty());
    debug_assert_eq!(nodes.len(), ordinates.len());

    let m = nodes.len() - 1;

    // Working copy; the recursion overwrites it column by column.
    let mut y = DVector::from_column_slice(ordinates);

    for k in 1..=m {
        for i in (k..=m).rev() {
            let spread = nodes[i - k] - nodes[i];
            if spread == 0.0 {
                return Err(QuadratureError::DivisionByZero {
                    context: format!(
                        "extrapolation nodes {} and {} coincide at {}",
                        i - k,
                        i,
                        nodes[i]
                    ),
                });
            }
            y[i] += (y[i] - y[i - 1]) * nodes[i] / spread;
        }
    }

    Ok(y[m])
}
