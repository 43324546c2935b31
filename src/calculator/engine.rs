//! The calculator state machine.
//!
//! A [`Calculator`] owns the display text, at most one pending binary
//! operation, the "awaiting new entry" flag and the memory slot. Every method
//! runs to completion for a single key press.

use super::error::parse_number;
use super::format::{format_outcome, format_value};
use super::{BinaryOp, CalcError, Pending, ScientificFn};
use tracing::{debug, trace};

/// Display text after startup and after every clear.
pub const INITIAL_DISPLAY: &str = "0";

/// Calculator state driven by discrete key events.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    pub(super) display: String,
    pub(super) pending: Option<Pending>,
    pub(super) awaiting_new_entry: bool,
    pub(super) memory: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            awaiting_new_entry: true,
            memory: 0.0,
        }
    }

    /// The text currently on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operator waiting for a right operand, if any.
    pub fn pending_operation(&self) -> Option<BinaryOp> {
        self.pending.map(|p| p.op)
    }

    /// The left operand captured with the pending operator, if any.
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Whether the next digit starts a fresh number.
    pub fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Current value of the memory slot.
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Put a number on the display and start a fresh entry.
    pub(super) fn show_value(&mut self, value: f64) {
        self.display = format_value(value);
        self.awaiting_new_entry = true;
    }

    /// Show an outcome on the display, start a fresh entry and hand the
    /// outcome back.
    fn show(&mut self, outcome: Result<f64, CalcError>) -> Result<f64, CalcError> {
        if let Err(err) = &outcome {
            debug!(%err, "showing error marker");
        }
        self.display = format_outcome(&outcome);
        self.awaiting_new_entry = true;
        outcome
    }

    /// Append a digit or a decimal point.
    ///
    /// A second point in the same number is ignored, as is any symbol that is
    /// neither a digit nor `.`.
    pub fn append(&mut self, symbol: char) {
        if !symbol.is_ascii_digit() && symbol != '.' {
            trace!(%symbol, "ignoring non-numeric entry symbol");
            return;
        }

        if self.awaiting_new_entry {
            self.display.clear();
            self.awaiting_new_entry = false;
        }

        if symbol == '.' && self.display.contains('.') {
            return;
        }
        self.display.push(symbol);
    }

    /// Drop the last character, or clear when only one is left.
    pub fn backspace(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.clear();
        }
    }

    /// Reset the display and drop any pending operation. Memory survives.
    pub fn clear(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.pending = None;
        self.awaiting_new_entry = true;
    }

    /// Negate the displayed number. Does nothing if it does not parse.
    pub fn toggle_sign(&mut self) {
        if let Ok(value) = parse_number(&self.display) {
            self.show_value(-value);
        }
    }

    /// Put pi on the display.
    pub fn insert_pi(&mut self) {
        self.show_value(std::f64::consts::PI);
    }

    /// Capture the displayed number as the left operand of `op`.
    ///
    /// A previously pending operation is replaced, not resolved: `5 + 3 - 2 =`
    /// computes `3 - 2`. If the display does not parse nothing changes.
    pub fn set_operation(&mut self, op: BinaryOp) {
        match parse_number(&self.display) {
            Ok(operand) => {
                if let Some(previous) = self.pending {
                    debug!(previous = %previous.op, %op, "replacing pending operation");
                }
                self.pending = Some(Pending { operand, op });
                self.awaiting_new_entry = true;
            }
            Err(err) => trace!(%err, %op, "operator ignored"),
        }
    }

    /// Resolve the pending operation against the displayed number (`=`).
    ///
    /// With nothing pending the displayed number is echoed back. The pending
    /// operation is cleared whatever the outcome.
    pub fn resolve(&mut self) -> Result<f64, CalcError> {
        let pending = self.pending.take();
        let outcome = parse_number(&self.display).and_then(|rhs| match pending {
            Some(Pending { operand, op }) => op.apply(operand, rhs),
            None => Ok(rhs),
        });
        debug!(?pending, ?outcome, "resolved");
        self.show(outcome)
    }

    /// Apply a scientific function to the displayed number.
    ///
    /// Errors show the marker but leave any pending operation in place.
    pub fn apply_function(&mut self, function: ScientificFn) -> Result<f64, CalcError> {
        let outcome = parse_number(&self.display).and_then(|x| function.apply(x));
        debug!(%function, ?outcome, "applied function");
        self.show(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(calc: &mut Calculator, digits: &str) {
        for c in digits.chars() {
            calc.append(c);
        }
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operation(), None);
        assert_eq!(calc.pending_operand(), None);
        assert!(calc.is_awaiting_new_entry());
        assert_eq!(calc.memory(), 0.0);
    }

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        keys(&mut calc, "123.45");
        assert_eq!(calc.display(), "123.45");
        assert!(!calc.is_awaiting_new_entry());
    }

    #[test]
    fn test_second_point_is_ignored() {
        let mut calc = Calculator::new();
        keys(&mut calc, "1.2.3.");
        assert_eq!(calc.display(), "1.23");
        assert_eq!(calc.display().matches('.').count(), 1);
    }

    #[test]
    fn test_point_after_result_starts_fresh() {
        let mut calc = Calculator::new();
        keys(&mut calc, "1.5");
        calc.resolve().unwrap();
        keys(&mut calc, ".5");
        assert_eq!(calc.display(), ".5");
    }

    #[test]
    fn test_non_numeric_symbols_are_ignored() {
        let mut calc = Calculator::new();
        keys(&mut calc, "4x2");
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::new();
        keys(&mut calc, "123");
        calc.backspace();
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn test_backspace_single_char_clears() {
        let mut calc = Calculator::new();
        keys(&mut calc, "7");
        calc.set_operation(BinaryOp::Add);
        keys(&mut calc, "9");
        calc.backspace();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operation(), None);
        assert!(calc.is_awaiting_new_entry());
    }

    #[test]
    fn test_clear_keeps_memory() {
        let mut calc = Calculator::new();
        calc.memory = 4.0;
        keys(&mut calc, "55");
        calc.set_operation(BinaryOp::Multiply);
        calc.clear();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operation(), None);
        assert_eq!(calc.memory(), 4.0);
    }

    #[test]
    fn test_toggle_sign() {
        let mut calc = Calculator::new();
        keys(&mut calc, "2.5");
        calc.toggle_sign();
        assert_eq!(calc.display(), "-2.5");
        assert!(calc.is_awaiting_new_entry());
        calc.toggle_sign();
        assert_eq!(calc.display(), "2.5");
    }

    #[test]
    fn test_toggle_sign_on_garbage_is_a_no_op() {
        let mut calc = Calculator::new();
        keys(&mut calc, ".");
        calc.toggle_sign();
        assert_eq!(calc.display(), ".");
        assert!(!calc.is_awaiting_new_entry());
    }

    #[test]
    fn test_shown_values_feed_pending_operation() {
        let mut calc = Calculator::new();
        keys(&mut calc, "5");
        calc.set_operation(BinaryOp::Add);
        keys(&mut calc, "3");
        calc.toggle_sign();
        assert_eq!(calc.pending_operation(), Some(BinaryOp::Add));
        assert_eq!(calc.resolve(), Ok(2.0));

        calc.set_operation(BinaryOp::Multiply);
        calc.insert_pi();
        keys(&mut calc, "2");
        assert_eq!(calc.display(), "2");
        assert_eq!(calc.resolve(), Ok(4.0));
    }

    #[test]
    fn test_insert_pi() {
        let mut calc = Calculator::new();
        keys(&mut calc, "12");
        calc.insert_pi();
        assert_eq!(calc.display(), std::f64::consts::PI.to_string());
        assert!(calc.display().starts_with("3.14159"));
        assert!(calc.is_awaiting_new_entry());
    }

    #[test]
    fn test_simple_arithmetic() {
        let mut calc = Calculator::new();
        keys(&mut calc, "12");
        calc.set_operation(BinaryOp::Add);
        keys(&mut calc, "30");
        assert_eq!(calc.resolve(), Ok(42.0));
        assert_eq!(calc.display(), "42");
        assert_eq!(calc.pending_operation(), None);
        assert!(calc.is_awaiting_new_entry());
    }

    #[test]
    fn test_set_operation_captures_operand() {
        let mut calc = Calculator::new();
        keys(&mut calc, "8");
        calc.set_operation(BinaryOp::Divide);
        assert_eq!(calc.pending_operation(), Some(BinaryOp::Divide));
        assert_eq!(calc.pending_operand(), Some(8.0));
        assert!(calc.is_awaiting_new_entry());
    }

    #[test]
    fn test_chained_operator_discards_first() {
        let mut calc = Calculator::new();
        keys(&mut calc, "5");
        calc.set_operation(BinaryOp::Add);
        keys(&mut calc, "3");
        calc.set_operation(BinaryOp::Subtract);
        keys(&mut calc, "2");
        assert_eq!(calc.resolve(), Ok(1.0));
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_operator_on_unparseable_display_is_ignored() {
        let mut calc = Calculator::new();
        keys(&mut calc, "4");
        calc.set_operation(BinaryOp::Add);
        keys(&mut calc, ".");
        calc.set_operation(BinaryOp::Multiply);
        assert_eq!(calc.pending_operation(), Some(BinaryOp::Add));
        assert_eq!(calc.pending_operand(), Some(4.0));
    }

    #[test]
    fn test_division_by_zero_resets() {
        let mut calc = Calculator::new();
        keys(&mut calc, "10");
        calc.set_operation(BinaryOp::Divide);
        keys(&mut calc, "0");
        assert_eq!(calc.resolve(), Err(CalcError::DivisionByZero));
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.pending_operation(), None);
        assert!(calc.is_awaiting_new_entry());
    }

    #[test]
    fn test_resolve_on_unparseable_display() {
        let mut calc = Calculator::new();
        keys(&mut calc, "3");
        calc.set_operation(BinaryOp::Add);
        keys(&mut calc, ".");
        assert!(matches!(calc.resolve(), Err(CalcError::InvalidNumber(_))));
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.pending_operation(), None);
    }

    #[test]
    fn test_equals_without_operator_is_idempotent() {
        let mut calc = Calculator::new();
        keys(&mut calc, "9");
        for _ in 0..3 {
            assert_eq!(calc.resolve(), Ok(9.0));
            assert_eq!(calc.display(), "9");
        }
    }

    #[test]
    fn test_equals_normalizes_display() {
        let mut calc = Calculator::new();
        keys(&mut calc, "007.");
        calc.resolve().unwrap();
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_digit_after_error_starts_fresh() {
        let mut calc = Calculator::new();
        keys(&mut calc, "1");
        calc.set_operation(BinaryOp::Divide);
        keys(&mut calc, "0");
        let _ = calc.resolve();
        keys(&mut calc, "6");
        assert_eq!(calc.display(), "6");
    }

    #[test]
    fn test_function_result() {
        let mut calc = Calculator::new();
        keys(&mut calc, "16");
        assert_eq!(calc.apply_function(ScientificFn::Sqrt), Ok(4.0));
        assert_eq!(calc.display(), "4");
        assert!(calc.is_awaiting_new_entry());
    }

    #[test]
    fn test_function_domain_errors() {
        let cases = [
            ("4", ScientificFn::Sqrt, true),
            ("0", ScientificFn::Log, false),
            ("0", ScientificFn::Reciprocal, false),
        ];
        for (digits, function, negate) in cases {
            let mut calc = Calculator::new();
            keys(&mut calc, digits);
            if negate {
                calc.toggle_sign();
            }
            assert!(calc.apply_function(function).is_err());
            assert_eq!(calc.display(), "Error");
        }
    }

    #[test]
    fn test_function_error_keeps_pending_operation() {
        let mut calc = Calculator::new();
        keys(&mut calc, "5");
        calc.set_operation(BinaryOp::Add);
        keys(&mut calc, "0");
        assert!(calc.apply_function(ScientificFn::Ln).is_err());
        assert_eq!(calc.pending_operation(), Some(BinaryOp::Add));
        assert_eq!(calc.pending_operand(), Some(5.0));
    }

    #[test]
    fn test_function_feeds_pending_operation() {
        let mut calc = Calculator::new();
        keys(&mut calc, "2");
        calc.set_operation(BinaryOp::Multiply);
        keys(&mut calc, "9");
        calc.apply_function(ScientificFn::Sqrt).unwrap();
        assert_eq!(calc.resolve(), Ok(6.0));
    }

    #[test]
    fn test_function_on_error_marker() {
        let mut calc = Calculator::new();
        keys(&mut calc, "0");
        let _ = calc.apply_function(ScientificFn::Reciprocal);
        assert!(matches!(
            calc.apply_function(ScientificFn::Square),
            Err(CalcError::InvalidNumber(_))
        ));
        assert_eq!(calc.display(), "Error");
    }
}
