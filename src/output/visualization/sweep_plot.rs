//! Sweep curve plotting
//!
//! Renders the sweep output `K(z)` against the modulus `z` as a PNG image.
//! The curve is flat near `z = 0` (where `K(0) = π/2`) and turns sharply
//! upward towards the right edge — the onset of the logarithmic divergence
//! at `z = 1`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ellint_rs::output::visualization::{plot_sweep, PlotConfig};
//!
//! let records = sweep.run(&interval, &config)?;
//! plot_sweep(&records, "k_of_z.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::PlotConfig;
use crate::sweep::SweepRecord;

/// Plot `K(z)` versus `z` into a PNG file.
///
/// Pass `None` for the default look; axis ranges are derived from the data
/// with a 5% headroom above the largest value.
///
/// # Errors
///
/// - the record slice is empty;
/// - any record is non-finite (it would silently distort the axis ranges);
/// - the backend cannot create or write the image file.
pub fn plot_sweep(
    records: &[SweepRecord],
    path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    // ====== Validation ======

    if records.is_empty() {
        return Err("no sweep records to plot".into());
    }
    for record in records {
        if !record.modulus.is_finite() || !record.value.is_finite() {
            return Err(format!(
                "refusing to plot non-finite record at modulus {}",
                record.modulus
            )
            .into());
        }
    }

    // ====== Axis ranges ======

    let x_min = records.first().map(|r| r.modulus).unwrap_or(0.0);
    let x_max = records.last().map(|r| r.modulus).unwrap_or(1.0);

    let y_min = records.iter().map(|r| r.value).fold(f64::INFINITY, f64::min);
    let y_max = records
        .iter()
        .map(|r| r.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_headroom = 0.05 * (y_max - y_min).max(f64::MIN_POSITIVE);

    // ====== Draw ======

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (y_min - y_headroom)..(y_max + y_headroom))?;

    let mut mesh = chart.configure_mesh();
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.x_desc(config.xlabel.clone())
        .y_desc(config.ylabel.clone())
        .draw()?;

    let style = ShapeStyle::from(&config.line_color).stroke_width(config.line_width);
    chart.draw_series(LineSeries::new(
        records.iter().map(|r| (r.modulus, r.value)),
        style,
    ))?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
