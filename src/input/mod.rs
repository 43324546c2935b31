//! Input router.
//!
//! Maps key symbols (buttons and their keyboard shortcuts) to calculator
//! engine calls:
//! - Naming every key and its aliases
//! - Splitting a typed line into key presses, with suggestions for typos
//! - Dispatching a key to the engine and collecting the display and notices

mod keys;
mod router;
mod tokenizer;

pub use keys::{Key, MemoryKey};
pub use router::{Dispatch, Notice, dispatch};
pub use tokenizer::{InputError, suggest_key, tokenize};
