//! Sampling `y = m·x + b` over a fixed window.

use crate::calculator::format_value;
use anyhow::{Result, bail};
use serde::Serialize;

/// Number of samples across the window.
pub const SAMPLE_COUNT: usize = 400;
/// Left edge of the sampled window.
pub const X_MIN: f64 = -10.0;
/// Right edge of the sampled window.
pub const X_MAX: f64 = 10.0;

/// A line given by slope and intercept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearEquation {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearEquation {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Build a request from the two prompt answers.
    ///
    /// Returns `None` when either answer is missing (the user cancelled).
    pub fn from_answers(slope: Option<f64>, intercept: Option<f64>) -> Option<Self> {
        Some(Self::new(slope?, intercept?))
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Legend text, e.g. `y = 2x + -1`.
    pub fn label(&self) -> String {
        format!(
            "y = {}x + {}",
            format_value(self.slope),
            format_value(self.intercept)
        )
    }
}

/// Sampled points of an equation, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub equation: LinearEquation,
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PlotSeries {
    /// Sample the equation at [`SAMPLE_COUNT`] points over [`X_MIN`, `X_MAX`].
    pub fn sample(equation: LinearEquation) -> Self {
        let x = linspace(X_MIN, X_MAX, SAMPLE_COUNT);
        let y = x.iter().map(|&x| equation.eval(x)).collect();
        Self {
            equation,
            label: equation.label(),
            x,
            y,
        }
    }

    /// Fail if any sample is not finite, e.g. because the slope overflows.
    ///
    /// Renderers call this before writing anything: a non-finite sample has
    /// no position on a chart and JSON would silently turn it into `null`.
    pub fn ensure_finite(&self) -> Result<()> {
        if let Some((x, y)) = self.points().find(|(x, y)| !x.is_finite() || !y.is_finite()) {
            bail!(
                "{} has non-finite values in [{X_MIN}, {X_MAX}] (y = {y} at x = {x})",
                self.label
            );
        }
        Ok(())
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// `count` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    // Pin the last sample so rounding never misses the endpoint.
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}
