//! Canonical scanner configuration.
//!
//! Everything the engine consults while scanning lives in [`ScanConfig`].
//! Each option has exactly one representation here; shorthand forms
//! (`true`, a bare string, a compact bracket spec) are resolved before a
//! `ScanConfig` is built, so the scanner never branches on option shape.
//!
//! Predicates are stored as `Arc<dyn Fn .. + Send + Sync>`: a config is
//! cheap to clone and can be shared between engines and threads.

use std::fmt;
use std::sync::Arc;

use crate::cursor::Cursor;
use crate::error::{ConfigError, MarkerKind};

/// Quote markers selected when quoting is enabled without an explicit set.
pub const DEFAULT_QUOTES: &[&str] = &["\"", "'", "`"];

/// Bracket pairs selected when brackets are enabled without explicit pairs.
pub const DEFAULT_BRACKETS: &[(&str, &str)] = &[("[", "]"), ("(", ")")];

/// Escape character used unless escaping is overridden.
pub const DEFAULT_ESCAPE: char = '\\';

/// Single-character delimiter test.
pub type CharPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Escape test over `(char, byte offset, full input)`.
pub type EscapePredicate = Arc<dyn Fn(char, usize, &str) -> bool + Send + Sync>;

/// Retention test over `(marker text, byte offset, full input)`.
pub type MarkerPredicate = Arc<dyn Fn(&str, usize, &str) -> bool + Send + Sync>;

// ─── Delimiters ────────────────────────────────────────────────

/// Characters that end a token.
#[derive(Clone, Default)]
pub enum Delimiters {
    /// Any character outside `[A-Za-z0-9_]`.
    #[default]
    NonWord,
    /// Unicode whitespace.
    Whitespace,
    /// Exactly the listed characters. An empty set never matches.
    Set(Box<[char]>),
    /// Caller-supplied test.
    Predicate(CharPredicate),
}

impl Delimiters {
    /// Delimit on every character of `chars`.
    pub fn chars(chars: &str) -> Self {
        Delimiters::Set(chars.chars().collect())
    }

    /// Delimit wherever `pred` returns `true`.
    pub fn predicate(pred: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        Delimiters::Predicate(Arc::new(pred))
    }

    /// Returns `true` if `c` ends a token.
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match self {
            Delimiters::NonWord => !(c.is_ascii_alphanumeric() || c == '_'),
            Delimiters::Whitespace => c.is_whitespace(),
            Delimiters::Set(set) => set.contains(&c),
            Delimiters::Predicate(pred) => pred(c),
        }
    }
}

impl fmt::Debug for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiters::NonWord => f.write_str("NonWord"),
            Delimiters::Whitespace => f.write_str("Whitespace"),
            Delimiters::Set(set) => f.debug_tuple("Set").field(set).finish(),
            Delimiters::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ─── Quotes ────────────────────────────────────────────────────

/// Ordered set of quote markers.
///
/// Quotes are symmetric: a region opened by a marker is closed by the same
/// marker. When several markers match at one position the first listed wins,
/// so list longer markers before their prefixes (`"'''"` before `"'"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuoteSet {
    markers: Vec<String>,
}

impl QuoteSet {
    /// Build a quote set. Fails on an empty marker.
    pub fn new<I, S>(markers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers: Vec<String> = markers.into_iter().map(Into::into).collect();
        if markers.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyMarker {
                kind: MarkerKind::Quote,
            });
        }
        Ok(Self { markers })
    }

    /// `"`, `'` and `` ` ``.
    pub fn defaults() -> Self {
        Self {
            markers: DEFAULT_QUOTES.iter().map(|&q| q.to_string()).collect(),
        }
    }

    /// No quote markers: quoting disabled.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Marker at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.markers.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    /// Index of the first marker starting at the cursor.
    pub(crate) fn match_at(&self, cursor: &Cursor<'_>) -> Option<usize> {
        self.markers.iter().position(|m| cursor.at(m))
    }
}

// ─── Brackets ──────────────────────────────────────────────────

/// Ordered `(open, close)` bracket pairs.
///
/// Opening markers are tested before closing markers, and the first listed
/// pair wins on overlap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BracketPairs {
    pairs: Vec<(String, String)>,
}

impl BracketPairs {
    /// Build bracket pairs. Fails on an empty marker.
    pub fn new<I, O, C>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (O, C)>,
        O: Into<String>,
        C: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(open, close)| (open.into(), close.into()))
            .collect();
        for (open, close) in &pairs {
            if open.is_empty() {
                return Err(ConfigError::EmptyMarker {
                    kind: MarkerKind::BracketOpen,
                });
            }
            if close.is_empty() {
                return Err(ConfigError::EmptyMarker {
                    kind: MarkerKind::BracketClose,
                });
            }
        }
        Ok(Self { pairs })
    }

    /// Parse the compact form: consecutive characters pair up, so
    /// `"[](){}"` yields `[`/`]`, `(`/`)` and `{`/`}`.
    pub fn from_compact(spec: &str) -> Result<Self, ConfigError> {
        let chars: Vec<char> = spec.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(ConfigError::OddBracketSpec { len: chars.len() });
        }
        Ok(Self {
            pairs: chars
                .chunks_exact(2)
                .map(|pair| (pair[0].to_string(), pair[1].to_string()))
                .collect(),
        })
    }

    /// `[`/`]` and `(`/`)`.
    pub fn defaults() -> Self {
        Self {
            pairs: DEFAULT_BRACKETS
                .iter()
                .map(|&(open, close)| (open.to_string(), close.to_string()))
                .collect(),
        }
    }

    /// No pairs: brackets disabled.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Opening marker of pair `index`.
    pub fn open(&self, index: usize) -> Option<&str> {
        self.pairs.get(index).map(|(open, _)| open.as_str())
    }

    /// Closing marker of pair `index`.
    pub fn close(&self, index: usize) -> Option<&str> {
        self.pairs.get(index).map(|(_, close)| close.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(open, close)| (open.as_str(), close.as_str()))
    }

    /// Index of the first pair whose opening marker starts at the cursor.
    pub(crate) fn open_at(&self, cursor: &Cursor<'_>) -> Option<usize> {
        self.pairs.iter().position(|(open, _)| cursor.at(open))
    }

    /// Index of the first pair whose closing marker starts at the cursor.
    pub(crate) fn close_at(&self, cursor: &Cursor<'_>) -> Option<usize> {
        self.pairs.iter().position(|(_, close)| cursor.at(close))
    }
}

// ─── Escape ────────────────────────────────────────────────────

/// Decides whether a character escapes the one after it.
#[derive(Clone)]
pub enum EscapeRule {
    /// No escaping.
    None,
    /// This character escapes the next one.
    Char(char),
    /// Caller-supplied test over `(char, byte offset, full input)`.
    Predicate(EscapePredicate),
}

impl Default for EscapeRule {
    fn default() -> Self {
        EscapeRule::Char(DEFAULT_ESCAPE)
    }
}

impl EscapeRule {
    pub fn predicate(pred: impl Fn(char, usize, &str) -> bool + Send + Sync + 'static) -> Self {
        EscapeRule::Predicate(Arc::new(pred))
    }

    /// Returns `true` if `c` at `pos` escapes the following character.
    #[inline]
    pub fn matches(&self, c: char, pos: usize, input: &str) -> bool {
        match self {
            EscapeRule::None => false,
            EscapeRule::Char(escape) => c == *escape,
            EscapeRule::Predicate(pred) => pred(c, pos, input),
        }
    }
}

impl fmt::Debug for EscapeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeRule::None => f.write_str("None"),
            EscapeRule::Char(c) => f.debug_tuple("Char").field(c).finish(),
            EscapeRule::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ─── Retention ─────────────────────────────────────────────────

/// Whether a boundary marker's text is kept in the token being built.
#[derive(Clone)]
pub enum Retention {
    Discard,
    Keep,
    /// Decided per occurrence over `(marker text, byte offset, full input)`.
    Predicate(MarkerPredicate),
}

impl Retention {
    pub fn predicate(pred: impl Fn(&str, usize, &str) -> bool + Send + Sync + 'static) -> Self {
        Retention::Predicate(Arc::new(pred))
    }

    /// Returns `true` if `marker` at `pos` goes into the token.
    #[inline]
    pub fn keeps(&self, marker: &str, pos: usize, input: &str) -> bool {
        match self {
            Retention::Discard => false,
            Retention::Keep => true,
            Retention::Predicate(pred) => pred(marker, pos, input),
        }
    }
}

impl From<bool> for Retention {
    fn from(keep: bool) -> Self {
        if keep {
            Retention::Keep
        } else {
            Retention::Discard
        }
    }
}

impl fmt::Debug for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Retention::Discard => f.write_str("Discard"),
            Retention::Keep => f.write_str("Keep"),
            Retention::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ─── ScanConfig ────────────────────────────────────────────────

/// Complete, canonical scanner configuration.
///
/// Defaults: non-word delimiters (discarded), quotes and brackets disabled
/// (retained when enabled), backslash escape, empty tokens suppressed.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    pub delimiters: Delimiters,
    pub quotes: QuoteSet,
    pub brackets: BracketPairs,
    pub escape: EscapeRule,
    pub keep_delimiters: Retention,
    pub keep_quotes: Retention,
    pub keep_brackets: Retention,
    /// Surface zero-length tokens (leading or consecutive delimiters).
    pub empty_tokens: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::default(),
            quotes: QuoteSet::default(),
            brackets: BracketPairs::default(),
            escape: EscapeRule::default(),
            keep_delimiters: Retention::Discard,
            keep_quotes: Retention::Keep,
            keep_brackets: Retention::Keep,
            empty_tokens: false,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    #[must_use]
    pub fn with_quotes(mut self, quotes: QuoteSet) -> Self {
        self.quotes = quotes;
        self
    }

    #[must_use]
    pub fn with_brackets(mut self, brackets: BracketPairs) -> Self {
        self.brackets = brackets;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: EscapeRule) -> Self {
        self.escape = escape;
        self
    }

    #[must_use]
    pub fn with_keep_delimiters(mut self, keep: impl Into<Retention>) -> Self {
        self.keep_delimiters = keep.into();
        self
    }

    #[must_use]
    pub fn with_keep_quotes(mut self, keep: impl Into<Retention>) -> Self {
        self.keep_quotes = keep.into();
        self
    }

    #[must_use]
    pub fn with_keep_brackets(mut self, keep: impl Into<Retention>) -> Self {
        self.keep_brackets = keep.into();
        self
    }

    #[must_use]
    pub fn with_empty_tokens(mut self, empty_tokens: bool) -> Self {
        self.empty_tokens = empty_tokens;
        self
    }
}

/// `ScanConfig` must stay shareable across threads.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ScanConfig>();
};
