//! Data export
//!
//! CSV export of sweep results for external analysis.

pub mod csv;

pub use csv::{export_sweep_csv, CsvConfig, CsvMetadata};
