//! Error types for hanscan-core.

use thiserror::Error;

/// Errors that can occur when loading a word list.
#[derive(Error, Debug)]
pub enum WordListError {
    /// The word-list source could not be fully read.
    #[error("failed to read word list: {0}")]
    Read(#[from] std::io::Error),
}

/// Result type alias using [`WordListError`].
pub type WordListResult<T> = Result<T, WordListError>;
