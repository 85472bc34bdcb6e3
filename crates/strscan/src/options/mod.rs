//! Caller-facing tokenizer options and their normalization.
//!
//! Every option accepts several shapes (a flag, an explicit list, a
//! predicate). Each shape is one variant of a per-option enum, and
//! [`TokenizerOptions::resolve`] turns the whole set into the canonical
//! [`ScanConfig`] exactly once, before any scanning. Malformed shapes are
//! reported there as [`ConfigError`].

use std::fmt;
use std::sync::Arc;

use strscan_core::{
    BracketPairs, CharPredicate, ConfigError, Delimiters, EscapePredicate, EscapeRule,
    MarkerPredicate, QuoteSet, Retention, ScanConfig,
};
use tracing::trace;

// ─── Delimiters ────────────────────────────────────────────────

/// Which characters end a token.
#[derive(Clone, Default)]
pub enum DelimiterOption {
    /// Nothing chosen: [`tokenize`](crate::tokenize) splits on non-word
    /// characters, [`split_string`](crate::split_string) on `,`.
    #[default]
    Unset,
    /// Any non-word character (`[^A-Za-z0-9_]`).
    Default,
    /// Each character of the string is a delimiter.
    Chars(String),
    /// Unicode whitespace.
    Whitespace,
    Predicate(CharPredicate),
}

impl DelimiterOption {
    pub fn predicate(pred: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        DelimiterOption::Predicate(Arc::new(pred))
    }

    fn resolve(self) -> Delimiters {
        match self {
            DelimiterOption::Unset | DelimiterOption::Default => Delimiters::NonWord,
            DelimiterOption::Chars(chars) => Delimiters::chars(&chars),
            DelimiterOption::Whitespace => Delimiters::Whitespace,
            DelimiterOption::Predicate(pred) => Delimiters::Predicate(pred),
        }
    }
}

impl From<&str> for DelimiterOption {
    fn from(chars: &str) -> Self {
        DelimiterOption::Chars(chars.to_string())
    }
}

impl From<char> for DelimiterOption {
    fn from(c: char) -> Self {
        DelimiterOption::Chars(c.to_string())
    }
}

impl fmt::Debug for DelimiterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterOption::Unset => f.write_str("Unset"),
            DelimiterOption::Default => f.write_str("Default"),
            DelimiterOption::Chars(chars) => f.debug_tuple("Chars").field(chars).finish(),
            DelimiterOption::Whitespace => f.write_str("Whitespace"),
            DelimiterOption::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ─── Brackets ──────────────────────────────────────────────────

/// Bracket nesting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BracketOption {
    #[default]
    Disabled,
    /// `[]` and `()`.
    Enabled,
    /// Explicit `(open, close)` pairs; markers may be several characters.
    Pairs(Vec<(String, String)>),
    /// Consecutive characters pair up: `"[](){}"`.
    Compact(String),
}

impl BracketOption {
    pub fn pairs<I, O, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (O, C)>,
        O: Into<String>,
        C: Into<String>,
    {
        BracketOption::Pairs(
            pairs
                .into_iter()
                .map(|(open, close)| (open.into(), close.into()))
                .collect(),
        )
    }

    fn resolve(self) -> Result<BracketPairs, ConfigError> {
        match self {
            BracketOption::Disabled => Ok(BracketPairs::default()),
            BracketOption::Enabled => Ok(BracketPairs::defaults()),
            BracketOption::Pairs(pairs) => BracketPairs::new(pairs),
            BracketOption::Compact(spec) => BracketPairs::from_compact(&spec),
        }
    }
}

impl From<bool> for BracketOption {
    fn from(enabled: bool) -> Self {
        if enabled {
            BracketOption::Enabled
        } else {
            BracketOption::Disabled
        }
    }
}

impl From<&str> for BracketOption {
    fn from(spec: &str) -> Self {
        BracketOption::Compact(spec.to_string())
    }
}

// ─── Quotes ────────────────────────────────────────────────────

/// Quoted regions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuoteOption {
    #[default]
    Disabled,
    /// `"`, `'` and `` ` ``.
    Enabled,
    Markers(Vec<String>),
}

impl QuoteOption {
    pub fn markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QuoteOption::Markers(markers.into_iter().map(Into::into).collect())
    }

    fn resolve(self) -> Result<QuoteSet, ConfigError> {
        match self {
            QuoteOption::Disabled => Ok(QuoteSet::default()),
            QuoteOption::Enabled => Ok(QuoteSet::defaults()),
            QuoteOption::Markers(markers) => QuoteSet::new(markers),
        }
    }
}

impl From<bool> for QuoteOption {
    fn from(enabled: bool) -> Self {
        if enabled {
            QuoteOption::Enabled
        } else {
            QuoteOption::Disabled
        }
    }
}

// ─── Escape ────────────────────────────────────────────────────

/// Escape handling.
#[derive(Clone, Default)]
pub enum EscapeOption {
    /// Backslash.
    #[default]
    Default,
    Disabled,
    Char(char),
    /// Empty text disables escaping; longer than one character is an error.
    Text(String),
    Predicate(EscapePredicate),
}

impl EscapeOption {
    pub fn predicate(pred: impl Fn(char, usize, &str) -> bool + Send + Sync + 'static) -> Self {
        EscapeOption::Predicate(Arc::new(pred))
    }

    fn resolve(self) -> Result<EscapeRule, ConfigError> {
        match self {
            EscapeOption::Default => Ok(EscapeRule::default()),
            EscapeOption::Disabled => Ok(EscapeRule::None),
            EscapeOption::Char(c) => Ok(EscapeRule::Char(c)),
            EscapeOption::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => Ok(EscapeRule::None),
                    (Some(c), None) => Ok(EscapeRule::Char(c)),
                    (Some(_), Some(_)) => Err(ConfigError::MultiCharEscape { text }),
                }
            }
            EscapeOption::Predicate(pred) => Ok(EscapeRule::Predicate(pred)),
        }
    }
}

impl From<char> for EscapeOption {
    fn from(c: char) -> Self {
        EscapeOption::Char(c)
    }
}

impl From<&str> for EscapeOption {
    fn from(text: &str) -> Self {
        EscapeOption::Text(text.to_string())
    }
}

impl From<bool> for EscapeOption {
    fn from(enabled: bool) -> Self {
        if enabled {
            EscapeOption::Default
        } else {
            EscapeOption::Disabled
        }
    }
}

impl fmt::Debug for EscapeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeOption::Default => f.write_str("Default"),
            EscapeOption::Disabled => f.write_str("Disabled"),
            EscapeOption::Char(c) => f.debug_tuple("Char").field(c).finish(),
            EscapeOption::Text(text) => f.debug_tuple("Text").field(text).finish(),
            EscapeOption::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ─── Retention ─────────────────────────────────────────────────

/// Whether boundary markers stay in tokens.
///
/// `Unset` defers to the per-kind default: delimiters are discarded, quote
/// and bracket markers are kept.
#[derive(Clone, Default)]
pub enum KeepOption {
    #[default]
    Unset,
    Flag(bool),
    Predicate(MarkerPredicate),
}

impl KeepOption {
    pub fn predicate(pred: impl Fn(&str, usize, &str) -> bool + Send + Sync + 'static) -> Self {
        KeepOption::Predicate(Arc::new(pred))
    }

    fn resolve(self, unset: Retention) -> Retention {
        match self {
            KeepOption::Unset => unset,
            KeepOption::Flag(keep) => Retention::from(keep),
            KeepOption::Predicate(pred) => Retention::Predicate(pred),
        }
    }
}

impl From<bool> for KeepOption {
    fn from(keep: bool) -> Self {
        KeepOption::Flag(keep)
    }
}

impl fmt::Debug for KeepOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepOption::Unset => f.write_str("Unset"),
            KeepOption::Flag(keep) => f.debug_tuple("Flag").field(keep).finish(),
            KeepOption::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ─── TokenizerOptions ──────────────────────────────────────────

/// Tokenizer options in caller-friendly form.
///
/// ```
/// use strscan::TokenizerOptions;
///
/// let options = TokenizerOptions::default()
///     .delimiters(",")
///     .quotes(true)
///     .keep_quotes(false);
/// assert!(options.resolve().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenizerOptions {
    pub delimiters: DelimiterOption,
    pub brackets: BracketOption,
    pub quotes: QuoteOption,
    pub escape: EscapeOption,
    pub keep_delimiters: KeepOption,
    pub keep_quotes: KeepOption,
    pub keep_brackets: KeepOption,
    pub empty_tokens: bool,
}

impl TokenizerOptions {
    #[must_use]
    pub fn delimiters(mut self, delimiters: impl Into<DelimiterOption>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    #[must_use]
    pub fn brackets(mut self, brackets: impl Into<BracketOption>) -> Self {
        self.brackets = brackets.into();
        self
    }

    #[must_use]
    pub fn quotes(mut self, quotes: impl Into<QuoteOption>) -> Self {
        self.quotes = quotes.into();
        self
    }

    #[must_use]
    pub fn escape(mut self, escape: impl Into<EscapeOption>) -> Self {
        self.escape = escape.into();
        self
    }

    #[must_use]
    pub fn keep_delimiters(mut self, keep: impl Into<KeepOption>) -> Self {
        self.keep_delimiters = keep.into();
        self
    }

    #[must_use]
    pub fn keep_quotes(mut self, keep: impl Into<KeepOption>) -> Self {
        self.keep_quotes = keep.into();
        self
    }

    #[must_use]
    pub fn keep_brackets(mut self, keep: impl Into<KeepOption>) -> Self {
        self.keep_brackets = keep.into();
        self
    }

    #[must_use]
    pub fn empty_tokens(mut self, empty_tokens: bool) -> Self {
        self.empty_tokens = empty_tokens;
        self
    }

    /// Resolve into the canonical configuration.
    pub fn resolve(self) -> Result<ScanConfig, ConfigError> {
        let config = ScanConfig {
            delimiters: self.delimiters.resolve(),
            quotes: self.quotes.resolve()?,
            brackets: self.brackets.resolve()?,
            escape: self.escape.resolve()?,
            keep_delimiters: self.keep_delimiters.resolve(Retention::Discard),
            keep_quotes: self.keep_quotes.resolve(Retention::Keep),
            keep_brackets: self.keep_brackets.resolve(Retention::Keep),
            empty_tokens: self.empty_tokens,
        };
        trace!(?config, "options resolved");
        Ok(config)
    }
}
