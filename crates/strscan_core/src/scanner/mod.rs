//! Pull-based token scanner.
//!
//! The scanner walks the input once, one character at a time, and produces
//! one token per [`Scanner::next_token`] call. All state lives in the
//! [`Scanner`] struct; [`Scanner::reset`] rewinds it without touching the
//! input or the configuration.
//!
//! # Decision order
//!
//! For the character under the cursor, the first rule that applies wins:
//!
//! 1. Escape: the following character is copied verbatim.
//! 2. Bracket open: push onto the bracket stack.
//! 3. Bracket close: must close the innermost open bracket, else
//!    [`ScanError::UnbalancedClose`].
//! 4. Inside a bracket: literal (delimiters and quote markers included).
//! 5. Quote: the active marker closes the quote; with no quote active, a
//!    configured marker opens one.
//! 6. Inside a quote: literal, other quote markers included.
//! 7. Delimiter: the buffer becomes the completed token.
//! 8. Anything else: appended.
//!
//! Bracket markers keep their meaning inside a quote: `'(' x` leaves a
//! bracket open and fails at end of input.
//!
//! Quote and bracket markers may be longer than one character; they are
//! matched as prefixes of the remaining input. Whether a marker's text lands
//! in the token is decided per occurrence by the matching
//! [`Retention`](crate::Retention). For brackets only the outermost pair is
//! subject to retention: `a,(b,(c))` with brackets discarded yields `a` and
//! `b,(c)`.
//!
//! # End of input
//!
//! An open bracket at end of input is [`ScanError::UnterminatedBracket`].
//! An open quote is not an error: its contents simply end the final token.

use std::iter::FusedIterator;
use std::ops::Range;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::error::ScanError;

/// One entry of the bracket stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenBracket {
    /// Index into [`BracketPairs`](crate::BracketPairs).
    pair: usize,
    /// Byte offset of the opening marker.
    pos: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Scanning,
    /// Final token emitted.
    Done,
    /// A structural error was returned. Only `reset()` resumes.
    Failed,
}

/// Configurable quote- and bracket-aware tokenizer over one input.
///
/// Produces one token at a time via [`next_token`](Self::next_token).
/// The returned `&str` borrows the scanner, so a token must be copied out
/// before the next one is requested.
#[derive(Debug)]
pub struct Scanner<'a> {
    config: ScanConfig,
    cursor: Cursor<'a>,
    /// Token under construction.
    token: String,
    /// Last token returned.
    current: String,
    /// Start offset of the last returned token.
    token_start: usize,
    /// Start offset of the token after it.
    next_start: usize,
    /// Exclusive end offset of the last returned token.
    token_end: usize,
    /// Open brackets, innermost last.
    brackets: SmallVec<[OpenBracket; 8]>,
    /// Index of the active quote marker.
    quote: Option<usize>,
    phase: Phase,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `input`.
    pub fn new(input: &'a str, config: ScanConfig) -> Self {
        Self {
            config,
            cursor: Cursor::new(input),
            token: String::new(),
            current: String::new(),
            token_start: 0,
            next_start: 0,
            token_end: 0,
            brackets: SmallVec::new(),
            quote: None,
            phase: Phase::Scanning,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted. After the final token,
    /// or after an error, every call returns `Ok(None)` until [`reset`].
    ///
    /// [`reset`]: Self::reset
    pub fn next_token(&mut self) -> Result<Option<&str>, ScanError> {
        if self.phase != Phase::Scanning {
            return Ok(None);
        }
        self.token_start = self.next_start;
        let input = self.cursor.source();

        loop {
            let pos = self.cursor.pos();
            let Some(c) = self.cursor.current() else {
                return self.finish();
            };

            if self.config.escape.matches(c, pos, input) {
                self.cursor.advance();
                if let Some(escaped) = self.cursor.current() {
                    self.token.push(escaped);
                    self.cursor.advance();
                }
                continue;
            }

            if let Some(pair) = self.config.brackets.open_at(&self.cursor) {
                self.open_bracket(pair, pos);
                continue;
            }
            if let Some(top) = self.brackets.last().copied() {
                let close = self.config.brackets.close(top.pair).unwrap_or_default();
                if self.cursor.at(close) {
                    self.close_bracket(top.pair, pos);
                    continue;
                }
            }
            if let Some(pair) = self.config.brackets.close_at(&self.cursor) {
                return Err(self.unbalanced_close(pair, pos));
            }
            if !self.brackets.is_empty() {
                self.token.push(c);
                self.cursor.advance();
                continue;
            }

            if let Some(quote) = self.quote {
                self.step_in_quote(quote, c, pos);
                continue;
            }
            if let Some(quote) = self.config.quotes.match_at(&self.cursor) {
                self.open_quote(quote, pos);
                continue;
            }

            if self.config.delimiters.matches(c) {
                self.cursor.advance();
                let delimiter = self.cursor.slice_from(pos);
                let keep = self.config.keep_delimiters.keeps(delimiter, pos, input);
                let seed = if keep {
                    delimiter.to_string()
                } else {
                    String::new()
                };
                let completed = std::mem::replace(&mut self.token, seed);
                self.next_start = if keep { pos } else { self.cursor.pos() };
                if !completed.is_empty() || self.config.empty_tokens {
                    return Ok(Some(self.emit(completed)));
                }
                // Empty token skipped: the next one starts here instead.
                self.token_start = self.next_start;
                continue;
            }

            self.token.push(c);
            self.cursor.advance();
        }
    }

    /// Iterate the remaining tokens.
    ///
    /// The iterator shares this scanner's state: tokens it yields are no
    /// longer returned by [`next_token`](Self::next_token), and vice versa.
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens { scanner: self }
    }

    /// Rewind to the start of the input.
    pub fn reset(&mut self) {
        debug!(pos = self.cursor.pos(), "scanner reset");
        self.cursor = Cursor::new(self.cursor.source());
        self.token.clear();
        self.current.clear();
        self.token_start = 0;
        self.next_start = 0;
        self.token_end = 0;
        self.brackets.clear();
        self.quote = None;
        self.phase = Phase::Scanning;
    }

    // ─── Introspection ─────────────────────────────────────────

    /// The input being scanned.
    pub fn input(&self) -> &'a str {
        self.cursor.source()
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Last token returned (empty before the first one).
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Byte offset where the last returned token began.
    ///
    /// A kept delimiter belongs to the token it seeds, so with
    /// `keep_delimiters` this is the delimiter's offset.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Exclusive byte offset of the last input consumed for the last
    /// returned token, including its terminating delimiter.
    pub fn token_end(&self) -> usize {
        self.token_end
    }

    /// `token_start()..token_end()`.
    pub fn token_span(&self) -> Range<usize> {
        self.token_start..self.token_end
    }

    /// Byte offset of the last character consumed for the last returned
    /// token. `None` before any token.
    pub fn last_index(&self) -> Option<usize> {
        self.cursor.char_start_before(self.token_end)
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Number of open brackets.
    pub fn depth(&self) -> usize {
        self.brackets.len()
    }

    /// Marker of the open quote, if any.
    pub fn active_quote(&self) -> Option<&str> {
        self.quote.and_then(|q| self.config.quotes.get(q))
    }

    /// `true` once the final token was returned or an error was raised.
    pub fn is_finished(&self) -> bool {
        self.phase != Phase::Scanning
    }

    // ─── Steps ─────────────────────────────────────────────────

    fn emit(&mut self, token: String) -> &str {
        self.current = token;
        self.token_end = self.cursor.pos();
        trace!(
            start = self.token_start,
            end = self.token_end,
            token = %self.current,
            "token"
        );
        &self.current
    }

    fn finish(&mut self) -> Result<Option<&str>, ScanError> {
        if let Some(open) = self.brackets.last().copied() {
            self.phase = Phase::Failed;
            let err = ScanError::UnterminatedBracket {
                open: self
                    .config
                    .brackets
                    .open(open.pair)
                    .unwrap_or_default()
                    .to_string(),
                expected: self
                    .config
                    .brackets
                    .close(open.pair)
                    .unwrap_or_default()
                    .to_string(),
                pos: open.pos,
            };
            debug!(%err, depth = self.brackets.len(), "scan failed");
            return Err(err);
        }

        self.phase = Phase::Done;
        let last = std::mem::take(&mut self.token);
        let surface_empty = self.config.empty_tokens && self.cursor.source_len() > 0;
        if last.is_empty() && !surface_empty {
            return Ok(None);
        }
        Ok(Some(self.emit(last)))
    }

    fn step_in_quote(&mut self, quote: usize, c: char, pos: usize) {
        let marker = self.config.quotes.get(quote).unwrap_or_default();
        if self.cursor.at(marker) {
            if self
                .config
                .keep_quotes
                .keeps(marker, pos, self.cursor.source())
            {
                self.token.push_str(marker);
            }
            self.cursor.advance_n(marker.len());
            self.quote = None;
        } else {
            self.token.push(c);
            self.cursor.advance();
        }
    }

    fn open_quote(&mut self, quote: usize, pos: usize) {
        let marker = self.config.quotes.get(quote).unwrap_or_default();
        if self
            .config
            .keep_quotes
            .keeps(marker, pos, self.cursor.source())
        {
            self.token.push_str(marker);
        }
        self.cursor.advance_n(marker.len());
        self.quote = Some(quote);
    }

    /// Retention applies to the outermost pair only; nested markers are
    /// group content and always kept.
    fn open_bracket(&mut self, pair: usize, pos: usize) {
        let marker = self.config.brackets.open(pair).unwrap_or_default();
        let outermost = self.brackets.is_empty();
        if !outermost
            || self
                .config
                .keep_brackets
                .keeps(marker, pos, self.cursor.source())
        {
            self.token.push_str(marker);
        }
        self.cursor.advance_n(marker.len());
        self.brackets.push(OpenBracket { pair, pos });
    }

    fn close_bracket(&mut self, pair: usize, pos: usize) {
        let marker = self.config.brackets.close(pair).unwrap_or_default();
        let outermost = self.brackets.len() == 1;
        if !outermost
            || self
                .config
                .keep_brackets
                .keeps(marker, pos, self.cursor.source())
        {
            self.token.push_str(marker);
        }
        self.cursor.advance_n(marker.len());
        self.brackets.pop();
    }

    /// Build the error for a closing marker that does not close the
    /// innermost open bracket. The cursor stays on the marker.
    #[cold]
    fn unbalanced_close(&mut self, pair: usize, pos: usize) -> ScanError {
        self.phase = Phase::Failed;
        let brackets = &self.config.brackets;
        let err = ScanError::UnbalancedClose {
            found: brackets.close(pair).unwrap_or_default().to_string(),
            expected: self
                .brackets
                .last()
                .and_then(|top| brackets.close(top.pair))
                .map(str::to_string),
            pos,
        };
        debug!(%err, depth = self.brackets.len(), "scan failed");
        err
    }
}

/// Iterator over the remaining tokens of a [`Scanner`].
///
/// Yields `Err` at most once; the scan is over after that.
#[derive(Debug)]
pub struct Tokens<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.scanner.next_token() {
            Ok(Some(token)) => Some(Ok(token.to_owned())),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

impl<'s, 'a> IntoIterator for &'s mut Scanner<'a> {
    type Item = Result<String, ScanError>;
    type IntoIter = Tokens<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}
