//! Calculator engine.
//!
//! This module provides:
//! - The key-driven state machine holding the display and pending operation
//! - Scientific function dispatch with domain checks
//! - The memory accumulator
//! - Copying the display to the clipboard

mod clipboard;
mod engine;
mod error;
mod format;
mod memory;
mod operation;
mod scientific;

pub use clipboard::copy_to_clipboard;
pub use engine::{Calculator, INITIAL_DISPLAY};
pub use error::CalcError;
pub use format::{ERROR_MARKER, format_outcome, format_value};
pub use operation::{BinaryOp, Pending};
pub use scientific::ScientificFn;
