pub mod filter;
pub mod lines;
pub mod normalize;
pub mod pattern;
pub mod values;

use crate::model::{Operator, Statement};
use crate::ExtractOptions;
use filter::check_candidate;
use lines::scan_lines;
use normalize::normalize_text;
use pattern::find_candidates;
use values::parse_value;

/// Extract p-value statements from one document's text.
///
/// Normalizes operator glyphs, then scans line by line: candidates are
/// matched, filtered for footnote legends and digit-less numerals, and
/// parsed. Statements come back in order of appearance. Never fails; text
/// without p-values yields an empty Vec.
pub fn extract_statements(raw_text: &str, options: &ExtractOptions) -> Vec<Statement> {
    let text = if options.normalize_glyphs {
        normalize_text(raw_text)
    } else {
        raw_text.to_string()
    };

    let mut statements = Vec::new();

    for line in scan_lines(&text) {
        for candidate in find_candidates(line.text) {
            if let Err(reason) = check_candidate(line.text, &candidate, options.suppress_footnotes)
            {
                log::debug!(
                    "line {}: dropped '{}' ({:?})",
                    line.number,
                    candidate.expression,
                    reason
                );
                continue;
            }

            // The pattern only admits ASCII operators.
            let Some(operator) = Operator::from_char(candidate.operator) else {
                continue;
            };

            statements.push(Statement {
                line_number: line.number,
                source_line: line.text.to_string(),
                value: parse_value(&candidate.raw_value_text, candidate.notation),
                expression: candidate.expression,
                operator,
                raw_value_text: candidate.raw_value_text,
                notation: candidate.notation,
            });
        }
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Notation, ValueStatus};

    fn extract(text: &str) -> Vec<Statement> {
        extract_statements(text, &ExtractOptions::default())
    }

    #[test]
    fn test_footnote_line_suppressed() {
        let statements = extract("* p < .05\nResults showed p < 0.001");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].line_number, 2);
        assert_eq!(statements[0].source_line, "Results showed p < 0.001");
        assert_eq!(statements[0].operator, Operator::Lt);
        assert_eq!(statements[0].value, Some(0.001));
    }

    #[test]
    fn test_plural_marker() {
        let statements = extract("ps < 0.01");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].operator, Operator::Lt);
        assert_eq!(statements[0].value, Some(0.01));
    }

    #[test]
    fn test_scientific_notation() {
        let statements = extract("p = 1.2e-5");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].operator, Operator::Eq);
        assert!((statements[0].value.unwrap() - 0.000012).abs() < 1e-12);
    }

    #[test]
    fn test_scaled_exponent_kept_without_value() {
        let statements = extract("p < 1.5*10^-9");
        assert_eq!(statements.len(), 1);
        assert!(statements[0].raw_value_text.contains("1.5*10^-9"));
        assert_eq!(statements[0].value, None);
        assert_eq!(statements[0].notation, Notation::ScaledExponent);
        assert_eq!(statements[0].value_status(), ValueStatus::Deferred);
    }

    #[test]
    fn test_embedded_whitespace() {
        let statements = extract("p = 0 . 0 5");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].value, Some(0.05));
        assert_eq!(statements[0].raw_value_text, "0 . 0 5");
    }

    #[test]
    fn test_corrupted_glyph_matches_like_ascii() {
        let corrupted = extract("the effect was reliable (p \u{00A1} 0.01)");
        let ascii = extract("the effect was reliable (p < 0.01)");
        assert_eq!(corrupted, ascii);
        assert_eq!(corrupted[0].operator, Operator::Lt);
    }

    #[test]
    fn test_unicode_minus_exponent_keeps_source_text() {
        let statements = extract("p = 1.2e\u{2212}5");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].raw_value_text, "1.2e\u{2212}5");
        assert!((statements[0].value.unwrap() - 1.2e-5).abs() < 1e-12);
    }

    #[test]
    fn test_layout_row_value_not_merged_with_columns() {
        let statements = extract("Group      p < .001      12      0.4");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].value, Some(0.001));
    }

    #[test]
    fn test_non_breaking_spaces_around_operator() {
        let statements = extract("effect (p\u{a0}<\u{a0}0.05) and (p\u{2009}=\u{2009}0.2)");
        let values: Vec<Option<f64>> = statements.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![Some(0.05), Some(0.2)]);
    }

    #[test]
    fn test_no_digit_rejected() {
        assert!(extract("p = .").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_order_of_appearance() {
        let statements = extract("p = 0.2 and p > .5\n\nfinally P < 0.001\n");
        let values: Vec<Option<f64>> = statements.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![Some(0.2), Some(0.5), Some(0.001)]);
        let lines: Vec<usize> = statements.iter().map(|s| s.line_number).collect();
        assert_eq!(lines, vec![1, 1, 3]);
    }

    #[test]
    fn test_options_disable_footnote_filter() {
        let options = ExtractOptions {
            suppress_footnotes: false,
            ..ExtractOptions::default()
        };
        assert_eq!(extract_statements("* p < .05", &options).len(), 1);
    }

    #[test]
    fn test_options_disable_normalization() {
        let options = ExtractOptions {
            normalize_glyphs: false,
            ..ExtractOptions::default()
        };
        assert!(extract_statements("p \u{00A1} 0.01", &options).is_empty());
    }

    #[test]
    fn test_source_line_is_untrimmed() {
        let statements = extract("   p = 0.04   ");
        assert_eq!(statements[0].source_line, "   p = 0.04   ");
    }
}
