//! Splitting a typed line into key presses.
//!
//! Digits are one key each, so `12+3=` is five presses. Names may be
//! separated by whitespace or run together with digits (`16sqrt`).

use super::Key;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// One key per match. Alternation order matters: `1/x` must win over
    /// the digit `1`, `m+`/`m-` over a bare word, `x²` over the word `x`.
    /// `1/x` only starts a key at a word boundary, so `21/x` is not `2 1/x`.
    /// The trailing `\S` catches anything unrecognised so it can be reported.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?i)\b1/x|m[+\-]|x²|[a-z_]+|[0-9]|\.|[+\-*/=]|[←±π√∛]|\S"
    ).unwrap();
}

/// A token that does not name any key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown key {token:?}{}", suggestion_hint(.suggestion))]
    UnknownKey {
        token: String,
        suggestion: Option<&'static str>,
    },
}

fn suggestion_hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(", did you mean {name:?}?"),
        None => String::new(),
    }
}

/// Split a line into keys.
///
/// Fails on the first token that is not a key; nothing is returned for a
/// partially valid line, so no key of it is applied.
pub fn tokenize(line: &str) -> Result<Vec<Key>, InputError> {
    KEY_TOKEN
        .find_iter(line)
        .map(|m| {
            let token = m.as_str();
            Key::from_name(token).ok_or_else(|| InputError::UnknownKey {
                token: token.to_string(),
                suggestion: suggest_key(token),
            })
        })
        .collect()
}

/// Find the known key name closest to a mistyped word.
///
/// Matches in both directions so that both abbreviations (`sqr`) and
/// overlong words (`sine`) find their key.
pub fn suggest_key(token: &str) -> Option<&'static str> {
    if !token.chars().any(|c| c.is_alphabetic()) {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    let lower = token.to_lowercase();
    Key::word_names()
        .filter_map(|name| {
            let forward = matcher.fuzzy_match(name, &lower);
            let reverse = matcher.fuzzy_match(&lower, name);
            forward.max(reverse).map(|score| (name, score))
        })
        .max_by_key(|&(_, score)| score)
        .map(|(name, _)| name)
}
