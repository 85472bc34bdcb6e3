//! Quote- and bracket-aware string scanner.
//!
//! Splits a string into tokens on configurable delimiters while keeping
//! quoted regions and nested bracket groups intact:
//!
//! ```
//! use strscan_core::{BracketPairs, Delimiters, ScanConfig, Scanner};
//!
//! let config = ScanConfig::default()
//!     .with_delimiters(Delimiters::chars(","))
//!     .with_brackets(BracketPairs::defaults());
//! let mut scanner = Scanner::new("a,(b,c),d", config);
//! let tokens: Result<Vec<_>, _> = scanner.tokens().collect();
//! assert_eq!(tokens.unwrap_or_default(), ["a", "(b,c)", "d"]);
//! ```
//!
//! This crate holds the engine and the canonical configuration only. Option
//! shorthand (`true`, compact bracket strings) and the collect/join helpers
//! live in the `strscan` crate.

mod config;
mod cursor;
mod error;
mod scanner;

pub use config::{
    BracketPairs, CharPredicate, Delimiters, EscapePredicate, EscapeRule, MarkerPredicate,
    QuoteSet, Retention, ScanConfig, DEFAULT_BRACKETS, DEFAULT_ESCAPE, DEFAULT_QUOTES,
};
pub use error::{ConfigError, MarkerKind, ScanError};
pub use scanner::{Scanner, Tokens};
