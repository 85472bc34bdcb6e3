//! Forward-only cursor over a borrowed `&str`.
//!
//! The cursor advances one `char` at a time and exposes byte offsets, so
//! every position it reports is a valid UTF-8 boundary and can be used to
//! slice the input directly. EOF is reached when the position equals the
//! input length; [`current()`](Cursor::current) then returns `None`.
//!
//! # Markers
//!
//! Quote and bracket markers may span several characters. Matching them is
//! a prefix test on the remaining input ([`Cursor::at`]); consuming them is
//! [`Cursor::advance_n`] by the marker's byte length.

/// Forward-only cursor over the scanner input.
///
/// The cursor is [`Copy`]; a snapshot is a plain copy.
///
/// # Invariant
///
/// `pos` is always a char boundary of `src` and `pos <= src.len()`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    /// Full input.
    src: &'a str,
    /// Current read position (byte offset into `src`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the current character. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance the cursor by `n` bytes.
    ///
    /// # Contract
    ///
    /// `pos + n` must land on a char boundary within the input. This holds
    /// when `n` is the byte length of a marker just matched with
    /// [`at()`](Self::at).
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(
            self.src.is_char_boundary(self.pos + n),
            "advance_n({n}) from {} leaves a char boundary",
            self.pos
        );
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Current byte offset in the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the input in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.src.len()
    }

    /// The full input this cursor walks.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Unconsumed remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        // `pos` is maintained on a char boundary, so this never falls back.
        self.src.get(self.pos..).unwrap_or_default()
    }

    /// Returns `true` if `marker` starts at the current position.
    ///
    /// Empty markers never match.
    #[inline]
    pub fn at(&self, marker: &str) -> bool {
        !marker.is_empty() && self.rest().starts_with(marker)
    }

    /// Extract an input substring.
    ///
    /// Out-of-range or non-boundary offsets yield an empty string.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src.get(start..end).unwrap_or_default()
    }

    /// Extract the input from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Byte offset of the last character that ends at or before `end`.
    ///
    /// Returns `None` when `end` is 0.
    pub fn char_start_before(&self, end: usize) -> Option<usize> {
        self.src
            .get(..end)
            .and_then(|head| head.char_indices().next_back())
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests;
