//! Demo: Complete Elliptic Integral Sweep
//!
//! Evaluates K(z) on the classical modulus grid — 101 points from 0 to
//! 0.98 — with Romberg integration at a relative tolerance of 1e-6, then:
//!
//! - prints one line per modulus (value, refinement count, achieved error)
//! - exports the table to `k_of_z.csv`
//! - renders the curve to `k_of_z.png`
//!
//! Run with:
//!
//! ```bash
//! cargo run --example elliptic_sweep
//! ```

use ellint_rs::output::{export_sweep_csv, plot_sweep, CsvConfig, CsvMetadata};
use ellint_rs::quadrature::QuadratureConfig;
use ellint_rs::sweep::ModulusSweep;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Complete Elliptic Integral of the First Kind — K(z)");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Sweep parameters ======

    let sweep = ModulusSweep::default(); // 101 moduli from 0 to 0.98
    let interval = ModulusSweep::standard_interval(); // [0, π/2]
    let tolerance = 1e-6;
    let max_refinements = 40;

    println!("Parameters:");
    println!("  interval        : {}", interval);
    println!("  tolerance (rel) : {:e}", tolerance);
    println!("  max refinements : {}", max_refinements);
    println!(
        "  modulus grid    : [{}, {}] with {} points\n",
        sweep.z_min,
        sweep.z_max,
        sweep.znum + 1
    );

    // ====== Run ======

    let config = QuadratureConfig::adaptive(tolerance, max_refinements);
    let records = sweep.run(&interval, &config)?;

    for record in &records {
        println!(
            "z {:25.16e}   f {:25.16e}   n {:4}  epsrel {:e}",
            record.modulus, record.value, record.refinements, record.achieved_rel_error
        );
    }

    // ====== Export ======

    let csv_config = CsvConfig {
        include_metadata: true,
        metadata: Some(CsvMetadata {
            method_name: Some("Romberg".to_string()),
            interval: Some(interval.to_string()),
            relative_tolerance: Some(tolerance),
        }),
        ..CsvConfig::default()
    };
    export_sweep_csv(&records, "k_of_z.csv", Some(&csv_config))?;
    println!("\nWrote k_of_z.csv");

    plot_sweep(&records, "k_of_z.png", None)?;
    println!("Wrote k_of_z.png");

    // ====== Summary ======

    let unconverged = records.iter().filter(|r| !r.converged).count();
    let deepest = records.iter().map(|r| r.refinements).max().unwrap_or(0);
    println!("\nSweep complete: {} points, deepest run {} refinements, {} unconverged",
        records.len(),
        deepest,
        unconverged
    );

    Ok(())
}
