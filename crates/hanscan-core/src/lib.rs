//! Core library for hanscan.
//!
//! Scores how readable a piece of Chinese text is for a particular reader,
//! given the list of words that reader already knows. The text is segmented
//! with a greedy longest-match pass over the word list; known spans are
//! wrapped in highlight delimiters and the score is the integer percentage of
//! scorable (Han) characters covered by known words.
//!
//! # Modules
//!
//! - [`word_list`] - Parsing known-vocabulary lists
//! - [`scanner`] - Segmentation scanning and markup
//! - [`score`] - Numeric readability scoring
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use hanscan_core::{Highlight, WordList, scan};
//!
//! let words: WordList = "一\n二\n三".parse().expect("in-memory parse");
//! let report = scan("一二三四", &words, &Highlight::default());
//!
//! assert_eq!(report.score, 75);
//! assert_eq!(report.markup, "<b>一</b><b>二</b><b>三</b>四");
//! ```
#![deny(unsafe_code)]

pub mod error;

pub mod scanner;

pub mod score;

pub mod word_list;

pub use error::{WordListError, WordListResult};

pub use scanner::{Highlight, ScanReport, scan};

pub use score::readability_score;

pub use word_list::WordList;
