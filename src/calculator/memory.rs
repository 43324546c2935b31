//! The single-slot memory accumulator (`MC`, `MR`, `M+`, `M-`).

use super::error::parse_number;
use super::{CalcError, Calculator};
use tracing::debug;

impl Calculator {
    /// Reset memory to zero.
    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
        debug!("memory cleared");
    }

    /// Show the memory value. Memory itself is not changed.
    pub fn memory_recall(&mut self) -> f64 {
        let value = self.memory;
        self.show_value(value);
        value
    }

    /// Add the displayed number to memory and return the amount added.
    pub fn memory_add(&mut self) -> Result<f64, CalcError> {
        let value = parse_number(&self.display)?;
        self.memory += value;
        debug!(value, memory = self.memory, "memory add");
        Ok(value)
    }

    /// Subtract the displayed number from memory and return the amount.
    pub fn memory_subtract(&mut self) -> Result<f64, CalcError> {
        let value = parse_number(&self.display)?;
        self.memory -= value;
        debug!(value, memory = self.memory, "memory subtract");
        Ok(value)
    }
}
