//! CSV export for sweep results
//!
//! Writes sweep records to CSV (comma-separated values), readable by Excel,
//! Python pandas, MATLAB, gnuplot, and most analysis tools.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use ellint_rs::output::export::export_sweep_csv;
//!
//! export_sweep_csv(&records, "k_of_z.csv", None)?;
//! ```
//!
//! **Output** (`k_of_z.csv`):
//! ```csv
//! modulus,value,refinements,achieved_rel_error,converged
//! 0.0000000000,1.5707963268,1,0e0,true
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use ellint_rs::output::export::{export_sweep_csv, CsvConfig, CsvMetadata};
//!
//! let mut config = CsvConfig::default();
//! config.include_metadata = true;
//! config.metadata = Some(CsvMetadata {
//!     method_name: Some("Romberg".to_string()),
//!     interval: Some("[0, pi/2]".to_string()),
//!     relative_tolerance: Some(1e-6),
//! });
//!
//! export_sweep_csv(&records, "k_of_z.csv", Some(&config))?;
//! ```
//!
//! The metadata block is written as `#`-prefixed comment lines before the
//! header, the convention gnuplot and pandas (`comment='#'`) both accept.

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::sweep::SweepRecord;

// =================================================================================================
// Configuration
// =================================================================================================

/// Options controlling the CSV layout.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Field delimiter (default: `,`)
    pub delimiter: char,

    /// Decimal digits for the modulus and value columns (default: 10)
    pub precision: usize,

    /// Write the `#`-prefixed metadata block before the header
    pub include_metadata: bool,

    /// Metadata to write when `include_metadata` is set
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 10,
            include_metadata: false,
            metadata: None,
        }
    }
}

/// Run parameters echoed into the metadata block for reproducibility.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Quadrature method name
    pub method_name: Option<String>,

    /// Integration interval, human-readable
    pub interval: Option<String>,

    /// Requested relative tolerance
    pub relative_tolerance: Option<f64>,
}

// =================================================================================================
// Export
// =================================================================================================

/// Export sweep records to a CSV file.
///
/// One row per record, ordered as given. Pass `None` for the default layout.
///
/// # Errors
///
/// - the record slice is empty (nothing to export is almost always a bug
///   upstream, so it fails loudly);
/// - any record contains a non-finite value (a NaN would silently corrupt
///   downstream analysis);
/// - the file cannot be created or written.
pub fn export_sweep_csv(
    records: &[SweepRecord],
    path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    // ====== Validation ======

    if records.is_empty() {
        return Err("no sweep records to export".into());
    }
    for record in records {
        if !record.modulus.is_finite() || !record.value.is_finite() {
            return Err(format!(
                "refusing to export non-finite record at modulus {}",
                record.modulus
            )
            .into());
        }
    }

    // ====== Write ======

    let mut file = File::create(path)?;
    write_records(&mut file, records, config)?;

    Ok(())
}

/// Format the records into any writer. Split out of the file handling so the
/// content can be unit-tested without touching the filesystem.
fn write_records(
    out: &mut dyn Write,
    records: &[SweepRecord],
    config: &CsvConfig,
) -> Result<(), Box<dyn Error>> {
    let d = config.delimiter;

    if config.include_metadata {
        writeln!(out, "# Elliptic Integral Sweep")?;
        if let Some(metadata) = &config.metadata {
            if let Some(method) = &metadata.method_name {
                writeln!(out, "# Method: {}", method)?;
            }
            if let Some(interval) = &metadata.interval {
                writeln!(out, "# Interval: {}", interval)?;
            }
            if let Some(tolerance) = metadata.relative_tolerance {
                writeln!(out, "# Relative tolerance: {:e}", tolerance)?;
            }
        }
        writeln!(out, "#")?;
    }

    writeln!(
        out,
        "modulus{}value{}refinements{}achieved_rel_error{}converged",
        d, d, d, d
    )?;

    for record in records {
        writeln!(
            out,
            "{:.prec$}{}{:.prec$}{}{}{}{:e}{}{}",
            record.modulus,
            d,
            record.value,
            d,
            record.refinements,
            d,
            record.achieved_rel_error,
            d,
            record.converged,
            prec = config.precision,
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<SweepRecord> {
        vec![
            SweepRecord {
                modulus: 0.0,
                value: 1.5707963268,
                refinements: 1,
                achieved_rel_error: 0.0,
                converged: true,
            },
            SweepRecord {
                modulus: 0.5,
                value: 1.6857503548,
                refinements: 4,
                achieved_rel_error: 3.2e-9,
                converged: true,
            },
        ]
    }

    fn render(records: &[SweepRecord], config: &CsvConfig) -> String {
        let mut buffer = Vec::new();
        write_records(&mut buffer, records, config).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_lists_all_columns() {
        let text = render(&sample_records(), &CsvConfig::default());
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "modulus,value,refinements,achieved_rel_error,converged"
        );
    }

    #[test]
    fn one_row_per_record() {
        let text = render(&sample_records(), &CsvConfig::default());
        // header + 2 records
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("0.5000000000,1.6857503548,4,"));
    }

    #[test]
    fn metadata_block_is_comment_prefixed() {
        let config = CsvConfig {
            include_metadata: true,
            metadata: Some(CsvMetadata {
                method_name: Some("Romberg".to_string()),
                interval: Some("[0, pi/2]".to_string()),
                relative_tolerance: Some(1e-6),
            }),
            ..CsvConfig::default()
        };

        let text = render(&sample_records(), &config);
        assert!(text.starts_with("# Elliptic Integral Sweep"));
        assert!(text.contains("# Method: Romberg"));
        assert!(text.contains("# Interval: [0, pi/2]"));

        // The data header must follow the comment block
        let first_data_line = text.lines().find(|l| !l.starts_with('#')).unwrap();
        assert!(first_data_line.starts_with("modulus"));
    }

    #[test]
    fn custom_delimiter_is_honored() {
        let config = CsvConfig {
            delimiter: ';',
            ..CsvConfig::default()
        };
        let text = render(&sample_records(), &config);
        assert!(text.lines().next().unwrap().contains(';'));
        assert!(!text.lines().next().unwrap().contains(','));
    }

    #[test]
    fn empty_records_are_rejected() {
        let result = export_sweep_csv(&[], "/tmp/should_not_exist.csv", None);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_records_are_rejected() {
        let mut records = sample_records();
        records[1].value = f64::NAN;

        let result = export_sweep_csv(&records, "/tmp/should_not_exist.csv", None);
        assert!(result.is_err());
    }

    #[test]
    fn export_writes_a_readable_file() {
        let path = std::env::temp_dir().join("ellint_rs_csv_export_test.csv");
        let path = path.to_str().unwrap();

        export_sweep_csv(&sample_records(), path, None).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("modulus,"));
        assert_eq!(text.lines().count(), 3);

        std::fs::remove_file(path).ok();
    }
}
