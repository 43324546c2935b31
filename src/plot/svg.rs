//! SVG rendering of a sampled line.
//!
//! Produces a standalone 800x600 document: frame, dashed grid with tick
//! labels, dashed axis lines through the origin, the line itself, a legend,
//! the title and both axis labels.

use super::{PlotSeries, X_MAX, X_MIN};
use anyhow::{Result, bail};
use std::fmt::Write;
use std::ops::RangeInclusive;

pub const TITLE: &str = "Graph of Linear Equation";
const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const LEFT: f64 = 80.0;
const RIGHT: f64 = 770.0;
const TOP: f64 = 60.0;
const BOTTOM: f64 = 530.0;
/// Padding added on each side of the data range, as a fraction of the span.
const MARGIN: f64 = 0.05;
/// More grid lines than this means the step was lost to rounding.
const MAX_TICKS: f64 = 20.0;
/// Tick steps outside this range are labelled in scientific notation.
const PLAIN_TICK_STEPS: RangeInclusive<f64> = 1e-6..=1e15;
const LINE_COLOR: &str = "#1f77b4";

/// Data range shown on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// `[min, max]` widened by [`MARGIN`] of the span on each side.
    ///
    /// A flat range is widened by a tenth of its magnitude (at least 1) so
    /// that large values are not absorbed. Bounds are clamped to finite
    /// values.
    fn padded(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            bail!("cannot scale an axis to [{min}, {max}]");
        }
        let pad = if min == max {
            (min.abs() * 2.0 * MARGIN).max(1.0)
        } else {
            (max / 2.0 - min / 2.0) * 2.0 * MARGIN
        };
        let range = Self {
            min: (min - pad).max(f64::MIN),
            max: (max + pad).min(f64::MAX),
        };
        if range.half_span() <= 0.0 {
            bail!("cannot scale an axis to [{min}, {max}]");
        }
        Ok(range)
    }

    /// Half the width. Halving each bound first keeps it finite.
    fn half_span(&self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    /// Position of `value` in the range: 0 at `min`, 1 at `max`.
    fn fraction(&self, value: f64) -> f64 {
        (value / 2.0 - self.min / 2.0) / self.half_span()
    }

    fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Tick positions at a 1/2/5 step giving roughly eight intervals.
    fn ticks(&self) -> Result<(Vec<f64>, f64)> {
        let raw = self.half_span() / 4.0;
        let magnitude = 10f64.powf(raw.log10().floor());
        let step = [1.0, 2.0, 5.0, 10.0]
            .into_iter()
            .map(|factor| factor * magnitude)
            .find(|&step| step >= raw)
            .unwrap_or(10.0 * magnitude);
        if !step.is_finite() || step <= 0.0 {
            bail!("no tick step for [{}, {}]", self.min, self.max);
        }

        let first = (self.min / step).ceil();
        let last = (self.max / step).floor();
        let count = last - first;
        if count > MAX_TICKS {
            bail!("too many ticks for [{}, {}]", self.min, self.max);
        }
        let mut ticks: Vec<f64> = (0..=count.max(-1.0) as i64)
            .map(|i| (first + i as f64) * step)
            .collect();
        // Steps near the precision of the bounds can repeat a value.
        ticks.dedup();
        Ok((ticks, step))
    }
}

/// Maps data coordinates to SVG pixels.
struct Canvas {
    x: Range,
    y: Range,
}

impl Canvas {
    fn px(&self, x: f64) -> f64 {
        LEFT + self.x.fraction(x) * (RIGHT - LEFT)
    }

    fn py(&self, y: f64) -> f64 {
        BOTTOM - self.y.fraction(y) * (BOTTOM - TOP)
    }
}

/// Render the series as an SVG document.
///
/// Fails if any sample is not finite (e.g. an overflowing slope), since such
/// a line has no position on the canvas, or if the axes cannot be scaled.
pub fn render_svg(series: &PlotSeries) -> Result<String> {
    series.ensure_finite()?;
    if series.x.is_empty() {
        bail!("nothing to plot");
    }

    let y_min = series.y.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = series.y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let canvas = Canvas {
        x: Range::padded(X_MIN, X_MAX)?,
        y: Range::padded(y_min, y_max)?,
    };
    let x_ticks = canvas.x.ticks()?;
    let y_ticks = canvas.y.ticks()?;

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    )?;
    writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

    write_grid(&mut out, &canvas, &x_ticks, &y_ticks)?;
    write_axes(&mut out, &canvas)?;
    write_line(&mut out, &canvas, series)?;
    write_frame(&mut out)?;
    write_legend(&mut out, &series.label)?;
    write_labels(&mut out)?;

    writeln!(out, "</svg>")?;
    Ok(out)
}

fn write_grid(
    out: &mut String,
    canvas: &Canvas,
    (x_ticks, x_step): &(Vec<f64>, f64),
    (y_ticks, y_step): &(Vec<f64>, f64),
) -> std::fmt::Result {
    writeln!(out, r#"  <g class="grid" stroke="gray" stroke-width="0.5" stroke-dasharray="4 3">"#)?;
    for &x in x_ticks {
        let px = canvas.px(x);
        writeln!(out, r#"    <line x1="{px:.2}" y1="{TOP}" x2="{px:.2}" y2="{BOTTOM}"/>"#)?;
    }
    for &y in y_ticks {
        let py = canvas.py(y);
        writeln!(out, r#"    <line x1="{LEFT}" y1="{py:.2}" x2="{RIGHT}" y2="{py:.2}"/>"#)?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="ticks" font-size="11" fill="black">"#)?;
    for &x in x_ticks {
        writeln!(
            out,
            r#"    <text x="{:.2}" y="{}" text-anchor="middle">{}</text>"#,
            canvas.px(x),
            BOTTOM + 16.0,
            format_tick(x, *x_step)
        )?;
    }
    for &y in y_ticks {
        writeln!(
            out,
            r#"    <text x="{}" y="{:.2}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            LEFT - 6.0,
            canvas.py(y),
            format_tick(y, *y_step)
        )?;
    }
    writeln!(out, "  </g>")
}

fn write_axes(out: &mut String, canvas: &Canvas) -> std::fmt::Result {
    writeln!(out, r#"  <g class="axes" stroke="black" stroke-width="0.8" stroke-dasharray="6 4">"#)?;
    if canvas.y.contains(0.0) {
        let py = canvas.py(0.0);
        writeln!(out, r#"    <line x1="{LEFT}" y1="{py:.2}" x2="{RIGHT}" y2="{py:.2}"/>"#)?;
    }
    if canvas.x.contains(0.0) {
        let px = canvas.px(0.0);
        writeln!(out, r#"    <line x1="{px:.2}" y1="{TOP}" x2="{px:.2}" y2="{BOTTOM}"/>"#)?;
    }
    writeln!(out, "  </g>")
}

fn write_line(out: &mut String, canvas: &Canvas, series: &PlotSeries) -> std::fmt::Result {
    let points: Vec<String> = series
        .points()
        .map(|(x, y)| format!("{:.2},{:.2}", canvas.px(x), canvas.py(y)))
        .collect();
    writeln!(
        out,
        r#"  <polyline class="series" fill="none" stroke="{LINE_COLOR}" stroke-width="1.5" points="{}"/>"#,
        points.join(" ")
    )
}

fn write_frame(out: &mut String) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <rect x="{LEFT}" y="{TOP}" width="{}" height="{}" fill="none" stroke="black" stroke-width="1"/>"#,
        RIGHT - LEFT,
        BOTTOM - TOP
    )
}

fn write_legend(out: &mut String, label: &str) -> std::fmt::Result {
    let label = escape_xml(label);
    let width = 50.0 + 7.0 * label.chars().count() as f64;
    let (x, y) = (LEFT + 10.0, TOP + 10.0);
    writeln!(out, r#"  <g class="legend">"#)?;
    writeln!(
        out,
        r##"    <rect x="{x}" y="{y}" width="{width}" height="26" fill="white" fill-opacity="0.8" stroke="#cccccc"/>"##
    )?;
    writeln!(
        out,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{LINE_COLOR}" stroke-width="1.5"/>"#,
        x + 8.0,
        y + 13.0,
        x + 36.0,
        y + 13.0
    )?;
    writeln!(
        out,
        r#"    <text x="{}" y="{}" font-size="12" dominant-baseline="middle">{label}</text>"#,
        x + 42.0,
        y + 13.0
    )?;
    writeln!(out, "  </g>")
}

fn write_labels(out: &mut String) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <text x="{}" y="{}" font-size="16" text-anchor="middle">{TITLE}</text>"#,
        (LEFT + RIGHT) / 2.0,
        TOP - 20.0
    )?;
    writeln!(
        out,
        r#"  <text x="{}" y="{}" font-size="12" text-anchor="middle">x-axis</text>"#,
        (LEFT + RIGHT) / 2.0,
        BOTTOM + 45.0
    )?;
    let (lx, ly) = (LEFT - 55.0, (TOP + BOTTOM) / 2.0);
    writeln!(
        out,
        r#"  <text x="{lx}" y="{ly}" font-size="12" text-anchor="middle" transform="rotate(-90 {lx} {ly})">y-axis</text>"#
    )
}

/// Format a tick value with just enough decimals for its step.
fn format_tick(value: f64, step: f64) -> String {
    // Adding zero turns -0.0 into 0.0.
    let value = value + 0.0;
    if !PLAIN_TICK_STEPS.contains(&step) {
        return format!("{value:e}");
    }
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil() as usize
    };
    format!("{value:.decimals$}")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
