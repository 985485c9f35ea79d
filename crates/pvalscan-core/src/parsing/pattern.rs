use crate::model::{CandidateMatch, Notation};
use regex::Regex;
use std::sync::LazyLock;

/// Horizontal whitespace: tabs plus every Unicode space separator, so the
/// non-breaking and thin spaces of journal markup count like ASCII spaces.
pub(crate) const HSPACE: &str = r"[\t\p{Zs}]";

/// Numeral alternatives, tried in order. Pieces of a numeral may be split
/// by a single space left over from PDF text reconstruction ("0 . 0 5"),
/// never by a run of spaces, which is a column gap in layout output. The
/// exponent sign also accepts U+2212 MINUS SIGN.
fn numeral_pattern() -> String {
    let gap = format!("{HSPACE}?");
    let digits = format!("[0-9](?:{gap}[0-9])*");
    let fraction = format!(r"{gap}\.(?:{gap}[0-9])*");
    let sign = r"[-+\x{2212}]?";
    [
        format!(r"(?P<scaled>{digits}(?:{fraction})?{gap}\*{gap}10{gap}\^{gap}{sign}{gap}{digits})"),
        format!(r"(?P<scientific>{digits}(?:{fraction})?{gap}[eE]{gap}{sign}{gap}{digits})"),
        format!(r"(?P<plain>(?:{digits}{gap})?\.(?:{gap}[0-9])*)"),
    ]
    .join("|")
}

/// The p-value expression: marker, operator, numeral.
pub(crate) static P_VALUE_SOURCE: LazyLock<String> = LazyLock::new(|| {
    format!(
        r"[pP][sS]?{HSPACE}*(?P<op>[<>=]){HSPACE}*(?P<value>{})",
        numeral_pattern()
    )
});

static P_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&P_VALUE_SOURCE).expect("p-value pattern is valid"));

/// Find every non-overlapping p-value expression in a line, left to right.
pub fn find_candidates(line: &str) -> Vec<CandidateMatch> {
    P_VALUE
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let operator = caps.name("op")?.as_str().chars().next()?;
            let value = caps.name("value")?;
            let notation = if caps.name("scaled").is_some() {
                Notation::ScaledExponent
            } else if caps.name("scientific").is_some() {
                Notation::Scientific
            } else {
                Notation::PlainDecimal
            };

            Some(CandidateMatch {
                start: whole.start(),
                end: whole.end(),
                expression: whole.as_str().to_string(),
                operator,
                raw_value_text: value.as_str().to_string(),
                notation,
            })
        })
        .collect()
}
