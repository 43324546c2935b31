//! Linear equation plotting.
//!
//! This module provides:
//! - Sampling `y = m·x + b` at 400 points over [-10, 10]
//! - Prompting for the slope and intercept, with cancellation
//! - Rendering the samples to an SVG chart or a JSON dump
//!
//! Plotting never touches calculator state.

mod prompt;
mod sampling;
mod svg;

pub use prompt::{INTERCEPT_PROMPT, SLOPE_PROMPT, ask_equation, ask_number, parse_finite};
pub use sampling::{LinearEquation, PlotSeries, SAMPLE_COUNT, X_MAX, X_MIN, linspace};
pub use svg::{TITLE, render_svg};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Output format of the plot collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlotFormat {
    /// A rendered chart.
    #[default]
    Svg,
    /// The raw samples, for an external renderer.
    Json,
}

/// Render a series in the given format.
///
/// Fails for either format if any sample is not finite.
pub fn render(series: &PlotSeries, format: PlotFormat) -> Result<String> {
    series.ensure_finite()?;
    match format {
        PlotFormat::Svg => render_svg(series),
        PlotFormat::Json => {
            serde_json::to_string_pretty(series).context("Failed to serialize plot samples")
        }
    }
}

/// Sample `equation`, render it and write the result to `path`.
pub fn plot_to_file(equation: LinearEquation, format: PlotFormat, path: &Path) -> Result<()> {
    let series = PlotSeries::sample(equation);
    let document = render(&series, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, document)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(label = %series.label, path = %path.display(), ?format, "plot written");
    Ok(())
}
