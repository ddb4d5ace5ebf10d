//! Concrete quadrature methods
//!
//! This module contains implementations of the
//! [`Quadrature`](crate::quadrature::Quadrature) trait.
//!
//! # Architecture
//!
//! The separation between the abstract interface (`quadrature::traits`) and
//! the concrete implementations here follows the Open-Closed Principle:
//! - **Open** for extension: add new methods without touching existing code
//! - **Closed** for modification: the `Quadrature` trait is stable
//!
//! # Available Methods
//!
//! - **[`TrapezoidRule`]**: composite trapezoidal rule
//!   - Order: O(h²)
//!   - Strategies: fixed-step composite pass, or adaptive halving with
//!     incremental midpoint reuse
//!   - Use: baselines, cross-checks, rough integrands
//!
//! - **[`RombergRule`]**: Richardson-accelerated trapezoidal refinement
//!   - Order: O(h^{2(m+1)}) after `m` refinement levels
//!   - Strategies: adaptive only
//!   - Use: **production runs** on smooth integrands
//!
//! # Design Philosophy
//!
//! Each method is:
//! - **Self-contained**: no shared mutable state
//! - **Stateless**: one value can serve any number of runs
//! - **Diagnosable**: every estimate carries its refinement count, achieved
//!   relative change, and convergence flag

pub mod romberg;
pub mod trapezoid;

// Re-exports for convenience
pub use romberg::RombergRule;
pub use trapezoid::TrapezoidRule;
