//! Output module for sweep results
//!
//! This module provides tools to output sweep results in two forms:
//! - **Visualization**: PNG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── config.rs
//! │   └── sweep_plot.rs
//! └── export/             ← Data export
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ellint_rs::output::{export_sweep_csv, plot_sweep};
//!
//! let records = sweep.run(&interval, &config)?;
//!
//! plot_sweep(&records, "k_of_z.png", None)?;
//! export_sweep_csv(&records, "k_of_z.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: for human interpretation
//! - **Export**: for programmatic analysis
//!
//! Both sub-modules accept plain `&[SweepRecord]` slices; neither knows
//! anything about how the records were computed.

pub mod export;
pub mod visualization;

pub use export::{export_sweep_csv, CsvConfig, CsvMetadata};
pub use visualization::{plot_sweep, PlotConfig};
