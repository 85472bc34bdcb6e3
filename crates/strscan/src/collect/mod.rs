//! Whole-input helpers on top of the incremental scanner.
//!
//! [`TokenStream`] adds `all`/`join` to [`Scanner`]; both rewind first, so
//! they always see the complete input no matter how far the scanner had
//! already advanced. The free functions build a scanner, drain it, and drop
//! it.

use strscan_core::{ConfigError, ScanConfig, ScanError, Scanner};
use tracing::debug;

use crate::options::{DelimiterOption, TokenizerOptions};
use crate::Error;

/// Collect or join every token of a scanner from the start of its input.
pub trait TokenStream {
    /// Rewind and collect every token.
    fn all(&mut self) -> Result<Vec<String>, ScanError>;

    /// Rewind and concatenate every token with `separator` between them.
    fn join(&mut self, separator: &str) -> Result<String, ScanError>;
}

impl TokenStream for Scanner<'_> {
    fn all(&mut self) -> Result<Vec<String>, ScanError> {
        self.reset();
        self.tokens().collect()
    }

    fn join(&mut self, separator: &str) -> Result<String, ScanError> {
        self.reset();
        let mut out = String::with_capacity(self.input().len());
        let mut first = true;
        while let Some(token) = self.next_token()? {
            if !first {
                out.push_str(separator);
            }
            first = false;
            out.push_str(token);
        }
        Ok(out)
    }
}

/// Scan `input` once and return every token.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn collect_all(input: &str, config: &ScanConfig) -> Result<Vec<String>, ScanError> {
    Scanner::new(input, config.clone()).all()
}

/// Scan `input` once and join the tokens with `separator`.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len(), separator = %separator))]
pub fn join_all(input: &str, config: &ScanConfig, separator: &str) -> Result<String, ScanError> {
    Scanner::new(input, config.clone()).join(separator)
}

/// Resolve `options` and return a scanner positioned at the start of `input`.
///
/// ```
/// use strscan::{tokenize, TokenStream, TokenizerOptions};
///
/// let options = TokenizerOptions::default().delimiters(" ").quotes(true);
/// let mut scanner = tokenize(r#"say "hello world""#, options).unwrap();
/// assert_eq!(scanner.all().unwrap(), ["say", "\"hello world\""]);
/// ```
pub fn tokenize(input: &str, options: TokenizerOptions) -> Result<Scanner<'_>, ConfigError> {
    Ok(Scanner::new(input, options.resolve()?))
}

/// Split `input` into fields, CSV style.
///
/// Delimiters default to `,` when none were chosen, and empty fields are
/// always produced, so `"a,,b"` yields `["a", "", "b"]`. An explicit
/// [`DelimiterOption::Default`] still splits on non-word characters.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn split_string(input: &str, mut options: TokenizerOptions) -> Result<Vec<String>, Error> {
    if matches!(options.delimiters, DelimiterOption::Unset) {
        options.delimiters = DelimiterOption::from(',');
    }
    options.empty_tokens = true;
    let fields = tokenize(input, options)?.all()?;
    debug!(fields = fields.len(), "split");
    Ok(fields)
}
