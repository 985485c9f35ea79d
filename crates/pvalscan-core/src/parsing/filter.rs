use crate::model::CandidateMatch;
use crate::parsing::pattern::{HSPACE, P_VALUE_SOURCE};
use regex::Regex;
use std::sync::LazyLock;

/// A p-value expression introduced by a footnote marker: stars, daggers
/// (single or double) or a bare period, e.g. `* p < .05` or `†† p < .01`.
static FOOTNOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:[*\u{{2020}}\u{{2021}}]+|\.){HSPACE}*{}",
        *P_VALUE_SOURCE
    ))
    .expect("footnote pattern is valid")
});

/// Why a candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The numeral has no digit, e.g. `p = .`.
    NoDigits,
    /// A footnote-marked p-value expression starts earlier in the line.
    FootnoteMarker,
}

/// Decide whether a candidate from `line` is a reported result.
///
/// Heuristic: any candidate at or after a footnote-marked expression is
/// treated as a table or figure legend entry. This over-rejects results
/// that follow a sentence-ending period on the same line and misses
/// legend styles outside the marker set.
pub fn check_candidate(
    line: &str,
    candidate: &CandidateMatch,
    suppress_footnotes: bool,
) -> Result<(), Rejection> {
    if !candidate.raw_value_text.chars().any(|c| c.is_ascii_digit()) {
        return Err(Rejection::NoDigits);
    }

    if suppress_footnotes && footnote_precedes(line, candidate.start) {
        return Err(Rejection::FootnoteMarker);
    }

    Ok(())
}

/// True when a footnote-marked expression begins before byte `start`.
///
/// The leftmost footnote match is the earliest marker in the line, so one
/// search decides it.
fn footnote_precedes(line: &str, start: usize) -> bool {
    FOOTNOTE.find(line).is_some_and(|m| m.start() < start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::pattern::find_candidates;

    fn verdicts(line: &str) -> Vec<Result<(), Rejection>> {
        find_candidates(line)
            .iter()
            .map(|c| check_candidate(line, c, true))
            .collect()
    }

    #[test]
    fn test_plain_result_accepted() {
        assert_eq!(verdicts("Results showed p < 0.001"), vec![Ok(())]);
    }

    #[test]
    fn test_no_digit_rejected() {
        assert_eq!(verdicts("p = ."), vec![Err(Rejection::NoDigits)]);
    }

    #[test]
    fn test_star_legend_rejected() {
        assert_eq!(verdicts("* p < .05"), vec![Err(Rejection::FootnoteMarker)]);
    }

    #[test]
    fn test_legend_line_with_several_levels() {
        assert_eq!(
            verdicts("* p < .05, ** p < .01, *** p < .001"),
            vec![Err(Rejection::FootnoteMarker); 3]
        );
    }

    #[test]
    fn test_dagger_legend_rejected() {
        assert_eq!(
            verdicts("\u{2020}\u{2020} p < .01"),
            vec![Err(Rejection::FootnoteMarker)]
        );
        assert_eq!(
            verdicts("\u{2021}p=.10"),
            vec![Err(Rejection::FootnoteMarker)]
        );
    }

    #[test]
    fn test_result_before_legend_accepted() {
        assert_eq!(
            verdicts("group effect p = 0.03; * p < .05"),
            vec![Ok(()), Err(Rejection::FootnoteMarker)]
        );
    }

    #[test]
    fn test_period_marker_over_rejects() {
        // Known limitation: a sentence ending right before the result.
        assert_eq!(
            verdicts("was reliable. p < 0.01 for both"),
            vec![Err(Rejection::FootnoteMarker)]
        );
    }

    #[test]
    fn test_star_in_scaled_exponent_is_not_a_marker() {
        assert_eq!(verdicts("p < 1.5*10^-9"), vec![Ok(())]);
    }

    #[test]
    fn test_star_without_expression_is_not_a_marker() {
        assert_eq!(verdicts("Table 2* shows p = 0.02"), vec![Ok(())]);
    }

    #[test]
    fn test_suppression_can_be_disabled() {
        let line = "* p < .05";
        let candidate = &find_candidates(line)[0];
        assert_eq!(check_candidate(line, candidate, false), Ok(()));
    }
}
