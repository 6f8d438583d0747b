//! Readability scoring.
//!
//! The score is the integer percentage of scorable characters that belong to
//! known-word spans. Division truncates toward zero, matching the integer
//! arithmetic the rest of the system expects.

/// Compute the readability score from the scan counters.
///
/// `known` is the total code-point length of matched spans; `unknown` is the
/// count of unmatched Han characters. A zero denominator means the text had
/// no scorable content at all (empty document, empty word list against
/// non-Han text, and so on) and scores 0 rather than faulting.
///
/// The result is always in `0..=100`.
#[must_use]
pub fn readability_score(known: usize, unknown: usize) -> u8 {
    let total = known + unknown;
    if total == 0 {
        return 0;
    }
    u8::try_from(known * 100 / total).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_scores_zero() {
        assert_eq!(readability_score(0, 0), 0);
    }

    #[test]
    fn all_known_scores_one_hundred() {
        assert_eq!(readability_score(12, 0), 100);
    }

    #[test]
    fn all_unknown_scores_zero() {
        assert_eq!(readability_score(0, 9), 0);
    }

    #[test]
    fn division_truncates_toward_zero() {
        // 2 * 100 / 3 = 66.67 truncates to 66
        assert_eq!(readability_score(2, 1), 66);
        assert_eq!(readability_score(1, 2), 33);
    }

    #[test]
    fn score_stays_in_bounds() {
        for known in 0..50 {
            for unknown in 0..50 {
                assert!(readability_score(known, unknown) <= 100);
            }
        }
    }
}
