//! Key symbols accepted by the calculator.

use crate::calculator::{BinaryOp, ScientificFn};
use std::fmt;

/// One of the four memory keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryKey {
    Clear,
    Recall,
    Add,
    Subtract,
}

/// A single discrete input: a button press or its keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit `0`-`9` or the decimal point.
    Entry(char),
    Operator(BinaryOp),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
    Pi,
    Function(ScientificFn),
    Memory(MemoryKey),
    Plot,
}

/// Named keys and their aliases. Lookup is case-insensitive.
const NAMED_KEYS: &[(&str, Key)] = &[
    ("=", Key::Equals),
    ("enter", Key::Equals),
    ("ce", Key::Clear),
    ("esc", Key::Clear),
    ("escape", Key::Clear),
    ("←", Key::Backspace),
    ("back", Key::Backspace),
    ("backspace", Key::Backspace),
    ("±", Key::ToggleSign),
    ("neg", Key::ToggleSign),
    ("π", Key::Pi),
    ("pi", Key::Pi),
    ("sin", Key::Function(ScientificFn::Sin)),
    ("cos", Key::Function(ScientificFn::Cos)),
    ("tan", Key::Function(ScientificFn::Tan)),
    ("√", Key::Function(ScientificFn::Sqrt)),
    ("sqrt", Key::Function(ScientificFn::Sqrt)),
    ("x²", Key::Function(ScientificFn::Square)),
    ("sq", Key::Function(ScientificFn::Square)),
    ("square", Key::Function(ScientificFn::Square)),
    ("log", Key::Function(ScientificFn::Log)),
    ("ln", Key::Function(ScientificFn::Ln)),
    ("exp", Key::Function(ScientificFn::Exp)),
    ("1/x", Key::Function(ScientificFn::Reciprocal)),
    ("recip", Key::Function(ScientificFn::Reciprocal)),
    ("reciprocal", Key::Function(ScientificFn::Reciprocal)),
    ("∛", Key::Function(ScientificFn::CubeRoot)),
    ("cbrt", Key::Function(ScientificFn::CubeRoot)),
    ("cube_root", Key::Function(ScientificFn::CubeRoot)),
    ("mc", Key::Memory(MemoryKey::Clear)),
    ("mr", Key::Memory(MemoryKey::Recall)),
    ("m+", Key::Memory(MemoryKey::Add)),
    ("m-", Key::Memory(MemoryKey::Subtract)),
    ("plot", Key::Plot),
];

impl Key {
    /// Look up a key by symbol or name.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Some(Self::Entry(c));
            }
            if let Some(op) = BinaryOp::from_symbol(c) {
                return Some(Self::Operator(op));
            }
        }

        let lower = name.to_lowercase();
        NAMED_KEYS
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map(|(_, key)| *key)
    }

    /// All alphabetic key names, used for "did you mean" suggestions.
    pub fn word_names() -> impl Iterator<Item = &'static str> {
        NAMED_KEYS
            .iter()
            .map(|(alias, _)| *alias)
            .filter(|alias| alias.chars().all(|c| c.is_ascii_alphabetic() || c == '_'))
    }

    /// Label of the on-screen button for this key.
    pub fn label(&self) -> String {
        match self {
            Self::Entry(c) => c.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "CE".to_string(),
            Self::Backspace => "←".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Pi => "π".to_string(),
            Self::Function(function) => function.label().to_string(),
            Self::Memory(MemoryKey::Clear) => "MC".to_string(),
            Self::Memory(MemoryKey::Recall) => "MR".to_string(),
            Self::Memory(MemoryKey::Add) => "M+".to_string(),
            Self::Memory(MemoryKey::Subtract) => "M-".to_string(),
            Self::Plot => "Plot Linear Equation".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_characters() {
        assert_eq!(Key::from_name("7"), Some(Key::Entry('7')));
        assert_eq!(Key::from_name("."), Some(Key::Entry('.')));
        assert_eq!(Key::from_name("*"), Some(Key::Operator(BinaryOp::Multiply)));
        assert_eq!(Key::from_name("="), Some(Key::Equals));
    }

    #[test]
    fn test_keyboard_shortcuts() {
        assert_eq!(Key::from_name("Enter"), Some(Key::Equals));
        assert_eq!(Key::from_name("BackSpace"), Some(Key::Backspace));
        assert_eq!(Key::from_name("Escape"), Some(Key::Clear));
    }

    #[test]
    fn test_button_labels_resolve() {
        for label in ["CE", "←", "±", "π", "√", "x²", "1/x", "∛", "MC", "MR", "M+", "M-"] {
            assert!(Key::from_name(label).is_some(), "{label} should be a key");
        }
    }

    #[test]
    fn test_every_function_has_a_key() {
        for function in ScientificFn::ALL {
            assert_eq!(Key::from_name(function.name()), Some(Key::Function(function)));
            assert_eq!(Key::from_name(function.label()), Some(Key::Function(function)));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(Key::from_name("sine"), None);
        assert_eq!(Key::from_name(""), None);
        assert_eq!(Key::from_name("%"), None);
    }

    #[test]
    fn test_word_names_exclude_symbols() {
        let names: Vec<_> = Key::word_names().collect();
        assert!(names.contains(&"sqrt"));
        assert!(names.contains(&"cube_root"));
        assert!(!names.contains(&"m+"));
        assert!(!names.contains(&"√"));
    }
}
