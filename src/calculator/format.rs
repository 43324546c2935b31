//! Display formatting for results and errors.

use super::CalcError;

/// Literal shown in place of a value when a computation fails.
pub const ERROR_MARKER: &str = "Error";

/// Format a number for the display.
///
/// Uses the default `f64` formatting with no precision cap, so `5.0` shows
/// as `5` and `0.1 + 0.2` keeps every significant digit.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Format a computation outcome: the value, or the error marker.
pub fn format_outcome(outcome: &Result<f64, CalcError>) -> String {
    match outcome {
        Ok(value) => format_value(*value),
        Err(_) => ERROR_MARKER.to_string(),
    }
}
