//! Plot configuration
//!
//! Common configuration structure for the sweep plots.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust,ignore
/// use ellint_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.title = "Complete Elliptic Integral".to_string();
/// config.line_color = BLUE;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "K(z)")
    pub title: String,

    /// X-axis label (default: "modulus z")
    pub xlabel: String,

    /// Y-axis label (default: "K(z)")
    pub ylabel: String,

    /// Curve color (default: RED)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "K(z)".to_string(),
            xlabel: "modulus z".to_string(),
            ylabel: "K(z)".to_string(),
            line_color: RED,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}
