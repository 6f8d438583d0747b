//! Greedy longest-match segmentation scanner.
//!
//! Walks the document once, left to right over code points. At each position
//! the longest word-list entry starting there is consumed as one annotated
//! span; when nothing matches, a single character passes through verbatim and
//! counts against the score if it is a Han character. Spans never overlap and
//! together cover the document exactly once.
//!
//! The scan is a pure function of its inputs: no I/O, no shared state, safe
//! to call concurrently over different inputs.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::score::readability_score;
use crate::word_list::WordList;

/// Regex for the Han script class, the character category scored for
/// comprehension. Punctuation, Latin letters, and digits fall outside it.
static HAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Han}").expect("valid regex"));

fn is_han(ch: char) -> bool {
    let mut buf = [0u8; 4];
    HAN_PATTERN.is_match(ch.encode_utf8(&mut buf))
}

/// Delimiter pair wrapped around every matched span in the markup output.
#[derive(Debug, Clone)]
pub struct Highlight {
    /// Emitted before a matched span.
    pub open: String,
    /// Emitted after a matched span.
    pub close: String,
}

impl Highlight {
    /// Build a delimiter pair from the given opening and closing markers.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for Highlight {
    /// Bold tags, what the original web front end rendered.
    fn default() -> Self {
        Self::new("<b>", "</b>")
    }
}

/// Result of scanning a document against a word list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    /// Readability score: integer percentage (0-100) of scorable characters
    /// covered by known-word spans.
    pub score: u8,
    /// The original text with every matched span wrapped in the highlight
    /// delimiters, unmatched characters passed through verbatim.
    pub markup: String,
    /// Total code-point length of matched spans.
    pub known_chars: usize,
    /// Count of unmatched Han characters.
    pub unknown_chars: usize,
}

/// Scan `text` against `words`, producing a readability score and annotated
/// markup.
///
/// At each position, candidate substrings are tried from the word list's
/// maximum entry length down to a single character; the first hit wins and
/// the cursor jumps past it. An unmatched character advances the cursor by
/// one and counts as unknown only when it is a Han character, so punctuation
/// and Latin text never dilute the score.
///
/// Degenerate inputs (empty text, empty word list, no Han content) are valid
/// and score 0 with passthrough markup.
#[tracing::instrument(skip(text, words), fields(text_len = text.len(), entries = words.len()))]
pub fn scan(text: &str, words: &WordList, highlight: &Highlight) -> ScanReport {
    let chars: Vec<char> = text.chars().collect();
    let mut markup = String::with_capacity(text.len());
    let mut known = 0usize;
    let mut unknown = 0usize;
    let mut candidate = String::new();

    let mut i = 0;
    while i < chars.len() {
        // Longest candidate first; max_chars is 0 for an empty list, so the
        // loop body is skipped entirely and everything passes through.
        let limit = words.max_chars().min(chars.len() - i);
        let mut matched = 0;
        for len in (1..=limit).rev() {
            candidate.clear();
            candidate.extend(&chars[i..i + len]);
            if words.contains(&candidate) {
                matched = len;
                break;
            }
        }

        if matched > 0 {
            markup.push_str(&highlight.open);
            markup.push_str(&candidate);
            markup.push_str(&highlight.close);
            known += matched;
            i += matched;
        } else {
            let ch = chars[i];
            markup.push(ch);
            if is_han(ch) {
                unknown += 1;
            }
            i += 1;
        }
    }

    let score = readability_score(known, unknown);
    debug!(score, known, unknown, "scan complete");

    ScanReport {
        score,
        markup,
        known_chars: known,
        unknown_chars: unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list(entries: &str) -> WordList {
        entries.parse().expect("in-memory parse cannot fail")
    }

    fn scan_default(text: &str, entries: &str) -> ScanReport {
        scan(text, &word_list(entries), &Highlight::default())
    }

    #[test]
    fn known_characters_score_fifty() {
        let report = scan_default("我知道一，二，三，四，和五，八点吧。", "一\n二\n三\n四\n五\n六\n七\n八\n九\n零");
        assert_eq!(report.score, 50);
        assert_eq!(report.known_chars, 6);
        assert_eq!(report.unknown_chars, 6);
        assert_eq!(
            report.markup,
            "我知道<b>一</b>，<b>二</b>，<b>三</b>，<b>四</b>，和<b>五</b>，<b>八</b>点吧。"
        );
    }

    #[test]
    fn longest_entry_wins_over_prefix() {
        // Both the two-character word and its first character are known;
        // the longer one must be consumed as a single span.
        let report = scan_default("图书馆", "图\n图书馆");
        assert_eq!(report.markup, "<b>图书馆</b>");
        assert_eq!(report.known_chars, 3);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn multi_character_entry_counts_full_length() {
        let report = scan_default("我去图书馆。", "图书馆");
        assert_eq!(report.known_chars, 3);
        assert_eq!(report.unknown_chars, 2);
        assert_eq!(report.score, 60);
        assert_eq!(report.markup, "我去<b>图书馆</b>。");
    }

    #[test]
    fn empty_word_list_scores_zero_with_passthrough() {
        let report = scan_default("你好吗", "");
        assert_eq!(report.score, 0);
        assert_eq!(report.known_chars, 0);
        assert_eq!(report.unknown_chars, 3);
        assert_eq!(report.markup, "你好吗");
    }

    #[test]
    fn empty_document_scores_zero() {
        let report = scan_default("", "一\n二");
        assert_eq!(report.score, 0);
        assert_eq!(report.markup, "");
    }

    #[test]
    fn non_han_text_is_not_scored() {
        let report = scan_default("hello, world! 123", "一");
        assert_eq!(report.score, 0);
        assert_eq!(report.known_chars, 0);
        assert_eq!(report.unknown_chars, 0);
        assert_eq!(report.markup, "hello, world! 123");
    }

    #[test]
    fn non_han_entry_still_counts_when_matched() {
        // The word list is Han by convention, not by construction.
        let report = scan_default("ok吗", "ok");
        assert_eq!(report.known_chars, 2);
        assert_eq!(report.unknown_chars, 1);
        assert_eq!(report.markup, "<b>ok</b>吗");
    }

    #[test]
    fn markup_stripped_of_delimiters_reproduces_document() {
        let text = "我知道一，二，三，四，和五，八点吧。";
        let report = scan_default(text, "一\n二\n三\n知道");
        let stripped = report.markup.replace("<b>", "").replace("</b>", "");
        assert_eq!(stripped, text);
    }

    #[test]
    fn rescanning_stripped_markup_is_idempotent() {
        let words = word_list("知道\n一\n五");
        let highlight = Highlight::default();
        let first = scan("我知道一，和五。", &words, &highlight);
        let stripped = first.markup.replace("<b>", "").replace("</b>", "");
        let second = scan(&stripped, &words, &highlight);
        assert_eq!(first.score, second.score);
        assert_eq!(first.markup, second.markup);
    }

    #[test]
    fn custom_delimiters_are_applied() {
        let report = scan("一二", &word_list("一"), &Highlight::new("[", "]"));
        assert_eq!(report.markup, "[一]二");
    }

    #[test]
    fn adjacent_matches_do_not_overlap() {
        let report = scan_default("一一一", "一");
        assert_eq!(report.markup, "<b>一</b><b>一</b><b>一</b>");
        assert_eq!(report.known_chars, 3);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn score_bounds_hold_across_inputs() {
        let words = word_list("一\n你好");
        for text in ["", "一", "你好一", "abc", "天地玄黄", "你好你好你好"] {
            let report = scan(text, &words, &Highlight::default());
            assert!(report.score <= 100);
        }
    }

    #[test]
    fn report_serializes_to_json() {
        let report = scan_default("一", "一");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 100);
        assert_eq!(json["markup"], "<b>一</b>");
    }
}
