//! scicalc: a keyboard-driven scientific calculator.
//!
//! The engine in [`calculator`] holds a single display value, at most one
//! pending binary operation and a memory slot. The [`input`] router maps key
//! symbols onto engine calls, [`plot`] samples and renders `y = m·x + b`, and
//! [`repl`] is the terminal front end tying them together.

pub mod calculator;
pub mod config;
pub mod input;
pub mod logging;
pub mod plot;
pub mod repl;

pub use calculator::{CalcError, Calculator};
pub use config::Config;
pub use input::{Dispatch, Key, dispatch};
