//! Combined error for the one-shot helpers.

use strscan_core::{ConfigError, ScanError};
use thiserror::Error;

/// Failure from a helper that both resolves options and scans.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid tokenizer options: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}
