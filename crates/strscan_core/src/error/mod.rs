//! Scanner and configuration errors.
//!
//! Two families, raised at different times:
//! - [`ConfigError`]: construction time, before any scanning happens.
//! - [`ScanError`]: structural errors found while stepping the scanner.
//!
//! Unterminated quotes are not an error. An unclosed quote at end of input
//! contributes its literal contents to the final token; only brackets are
//! required to balance.

use thiserror::Error;

/// Which kind of marker a [`ConfigError::EmptyMarker`] refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MarkerKind {
    Quote,
    BracketOpen,
    BracketClose,
}

impl MarkerKind {
    fn describe(self) -> &'static str {
        match self {
            MarkerKind::Quote => "quote",
            MarkerKind::BracketOpen => "opening bracket",
            MarkerKind::BracketClose => "closing bracket",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Malformed scanner configuration.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ConfigError {
    /// Compact bracket spec (`"[](){}"`) with an odd number of characters.
    #[error("bracket spec must pair opening and closing characters, got {len} characters")]
    OddBracketSpec { len: usize },
    /// A quote or bracket marker was the empty string.
    #[error("{kind} marker must not be empty")]
    EmptyMarker { kind: MarkerKind },
    /// Escape given as text longer than one character.
    #[error("escape must be a single character, got {text:?}")]
    MultiCharEscape { text: String },
}

/// Structural error found while scanning.
///
/// Both variants are fatal for the current scan: the scanner stops producing
/// tokens until it is reset.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ScanError {
    /// A closing bracket with no open bracket, or one that does not close
    /// the innermost open bracket.
    #[error("unbalanced closing bracket `{found}` at offset {pos}, {}", expected_clause(.expected))]
    UnbalancedClose {
        /// The closing marker found in the input.
        found: String,
        /// Closing marker the innermost open bracket expects, if any is open.
        expected: Option<String>,
        /// Byte offset of `found`.
        pos: usize,
    },
    /// End of input reached with an open bracket.
    #[error("bracket `{open}` opened at offset {pos} is not closed (expected `{expected}`)")]
    UnterminatedBracket {
        /// The innermost unmatched opening marker.
        open: String,
        /// The closing marker it requires.
        expected: String,
        /// Byte offset of `open`.
        pos: usize,
    },
}

impl ScanError {
    /// Byte offset the error points at.
    pub fn pos(&self) -> usize {
        match self {
            ScanError::UnbalancedClose { pos, .. } | ScanError::UnterminatedBracket { pos, .. } => {
                *pos
            }
        }
    }
}

fn expected_clause(expected: &Option<String>) -> String {
    match expected {
        Some(expected) => format!("expected `{expected}`"),
        None => "no bracket is open".to_string(),
    }
}
