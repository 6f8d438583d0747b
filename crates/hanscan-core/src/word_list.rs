//! Known-vocabulary word lists.
//!
//! A [`WordList`] is a deduplicated set of vocabulary entries parsed from a
//! newline-delimited source (one entry per line, any line-ending convention).
//! Entries may be one or many characters; the maximum entry length in code
//! points is precomputed so the scanner can bound its lookahead.

use std::collections::HashSet;
use std::io::BufRead;
use std::str::FromStr;

use tracing::debug;

use crate::error::{WordListError, WordListResult};

/// A set of known vocabulary entries.
///
/// Built once per scan and never mutated afterwards. Blank and
/// whitespace-only lines are skipped during parsing; an empty entry would
/// match at every position with a zero-length span and is never allowed in.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: HashSet<String>,
    max_chars: usize,
}

impl WordList {
    /// Parse a word list from a line-delimited byte stream.
    ///
    /// Each line is trimmed of leading and trailing whitespace before being
    /// inserted. Duplicate entries collapse into one.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Read`] if the stream fails before
    /// end-of-stream is reached.
    #[tracing::instrument(skip_all)]
    pub fn from_reader(reader: impl BufRead) -> WordListResult<Self> {
        let mut entries = HashSet::new();
        let mut max_chars = 0;

        for line in reader.lines() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            max_chars = max_chars.max(entry.chars().count());
            entries.insert(entry.to_string());
        }

        debug!(entries = entries.len(), max_chars, "word list loaded");
        Ok(Self { entries, max_chars })
    }

    /// Whether `candidate` is a known entry.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(candidate)
    }

    /// Length in code points of the longest entry (0 when empty).
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for WordList {
    type Err = WordListError;

    /// Parse a word list held in memory as one string.
    ///
    /// Cannot fail in practice (an in-memory read has no I/O path); the error
    /// type matches [`WordList::from_reader`] for callers generic over both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
