//! Configurable string tokenizer with quote, bracket and escape awareness.
//!
//! ```
//! use strscan::{split_string, TokenizerOptions};
//!
//! let fields = split_string(
//!     "a,(b,c,(d,e))",
//!     TokenizerOptions::default().brackets(true).keep_brackets(false),
//! );
//! assert_eq!(fields.unwrap_or_default(), ["a", "b,c,(d,e)"]);
//! ```
//!
//! # Crate layout
//!
//! - [`options`]: caller-friendly option shapes, resolved into a
//!   [`ScanConfig`] before scanning.
//! - [`collect`]: `all`/`join` on a [`Scanner`] plus one-shot helpers.
//! - The engine itself ([`Scanner`], [`ScanConfig`], the error types) is
//!   re-exported from `strscan_core`.

pub mod collect;
mod error;
pub mod options;

pub use collect::{collect_all, join_all, split_string, tokenize, TokenStream};
pub use error::Error;
pub use options::{
    BracketOption, DelimiterOption, EscapeOption, KeepOption, QuoteOption, TokenizerOptions,
};
pub use strscan_core::{
    BracketPairs, CharPredicate, ConfigError, Delimiters, EscapePredicate, EscapeRule,
    MarkerKind, MarkerPredicate, QuoteSet, Retention, ScanConfig, ScanError, Scanner, Tokens,
    DEFAULT_BRACKETS, DEFAULT_ESCAPE, DEFAULT_QUOTES,
};
