//! Demo: Plain Refinement vs Romberg Acceleration
//!
//! Evaluates K(0.9) with both methods at a sequence of tolerances and
//! compares refinement depth and wall time. The point of the exercise:
//! the two methods evaluate the *same* trapezoidal estimates — Romberg
//! merely extrapolates the table it already has — yet reaches tight
//! tolerances several levels (and therefore several doublings of the
//! evaluation count) earlier.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example method_comparison
//! ```

use ellint_rs::kernels::EllipticKernel;
use ellint_rs::quadrature::{
    Interval, Problem, Quadrature, QuadratureConfig, RombergRule, TrapezoidRule,
};

use std::f64::consts::FRAC_PI_2;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  K(0.9): Trapezoid Refinement vs Romberg Acceleration");
    println!("═══════════════════════════════════════════════════════\n");

    let modulus = 0.9;
    let interval = Interval::new(0.0, FRAC_PI_2);

    println!(
        "{:>10}  {:>8}  {:>22}  {:>7}  {:>12}",
        "tolerance", "method", "value", "levels", "time"
    );

    for &tolerance in &[1e-4, 1e-6, 1e-8, 1e-10, 1e-12] {
        let config = QuadratureConfig::adaptive(tolerance, 40);

        let trapezoid = TrapezoidRule::new();
        let start = Instant::now();
        let plain = trapezoid.integrate(
            &Problem::new(Box::new(EllipticKernel::new(modulus)), interval),
            &config,
        )?;
        let plain_time = start.elapsed();

        let romberg = RombergRule::new();
        let start = Instant::now();
        let accelerated = romberg.integrate(
            &Problem::new(Box::new(EllipticKernel::new(modulus)), interval),
            &config,
        )?;
        let accelerated_time = start.elapsed();

        println!(
            "{:>10.0e}  {:>8}  {:>22.16}  {:>7}  {:>12?}",
            tolerance,
            trapezoid.name(),
            plain.value,
            plain.refinements,
            plain_time
        );
        println!(
            "{:>10.0e}  {:>8}  {:>22.16}  {:>7}  {:>12?}",
            tolerance,
            romberg.name(),
            accelerated.value,
            accelerated.refinements,
            accelerated_time
        );

        let agreement = (plain.value - accelerated.value).abs();
        println!("{:>10}  methods agree to {:.1e}\n", "", agreement);
    }

    Ok(())
}
