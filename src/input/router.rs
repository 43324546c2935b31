//! Routing key presses to the calculator engine.

use super::{Key, MemoryKey};
use crate::calculator::{Calculator, format_value};
use tracing::trace;

/// A transient message for the user, shown next to the display.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Informational, e.g. a memory operation succeeded.
    Info { title: &'static str, message: String },
    /// Something the user should fix; calculator state is unaffected.
    Error { message: String },
}

impl Notice {
    fn memory(message: impl Into<String>) -> Self {
        Self::Info {
            title: "Memory",
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Get the message text.
    pub fn message(&self) -> &str {
        match self {
            Self::Info { message, .. } | Self::Error { message } => message,
        }
    }

    /// Check if this notice reports an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// What the presentation should do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// The engine handled the key; re-render [`Calculator::display`] and
    /// show the notice, if any.
    Updated { notice: Option<Notice> },
    /// The plot key was pressed. The engine is untouched; the caller runs
    /// the slope/intercept prompts and the plot collaborator.
    PlotRequested,
}

/// Apply one key press to the calculator.
pub fn dispatch(calc: &mut Calculator, key: Key) -> Dispatch {
    trace!(%key, "dispatch");

    let notice = match key {
        Key::Entry(symbol) => {
            calc.append(symbol);
            None
        }
        Key::Operator(op) => {
            calc.set_operation(op);
            None
        }
        Key::Equals => {
            let _ = calc.resolve();
            None
        }
        Key::Clear => {
            calc.clear();
            None
        }
        Key::Backspace => {
            calc.backspace();
            None
        }
        Key::ToggleSign => {
            calc.toggle_sign();
            None
        }
        Key::Pi => {
            calc.insert_pi();
            None
        }
        Key::Function(function) => {
            let _ = calc.apply_function(function);
            None
        }
        Key::Memory(memory_key) => dispatch_memory(calc, memory_key),
        Key::Plot => return Dispatch::PlotRequested,
    };

    Dispatch::Updated { notice }
}

fn dispatch_memory(calc: &mut Calculator, key: MemoryKey) -> Option<Notice> {
    match key {
        MemoryKey::Clear => {
            calc.memory_clear();
            Some(Notice::memory("Memory cleared"))
        }
        MemoryKey::Recall => {
            calc.memory_recall();
            None
        }
        MemoryKey::Add => Some(match calc.memory_add() {
            Ok(value) => Notice::memory(format!("Added {} to memory", format_value(value))),
            Err(_) => Notice::error("Invalid number"),
        }),
        MemoryKey::Subtract => Some(match calc.memory_subtract() {
            Ok(value) => Notice::memory(format!("Subtracted {} from memory", format_value(value))),
            Err(_) => Notice::error("Invalid number"),
        }),
    }
}
