//! Error conditions raised by the calculator engine.

use super::ScientificFn;
use thiserror::Error;

/// Why a computation could not produce a number.
///
/// None of these are fatal: the engine shows the error marker (or a notice,
/// for memory operations) and stays usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The display text is not a number (e.g. `"Error"` or a lone `"."`).
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The right-hand operand of a division was zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The argument lies outside the function's domain.
    #[error("{function} is undefined for {value}")]
    Domain { function: ScientificFn, value: f64 },
}

/// Parse display text the way the engine reads its own display.
pub(crate) fn parse_number(text: &str) -> Result<f64, CalcError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))
}
