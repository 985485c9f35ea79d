use crate::model::Notation;

/// Parse a captured numeral into a float.
///
/// Handles formats like:
/// - "0.05" -> Some(0.05)
/// - ".05" / "5." -> Some(0.05) / Some(5.0)
/// - "1.2e-5" -> Some(0.000012)
/// - "0 . 0 5" -> Some(0.05) (spaces from PDF layout are stripped)
/// - "1.2e\u{2212}5" -> Some(0.000012) (Unicode minus sign in the exponent)
/// - "1.5*10^-9" -> None (scaled-exponent notation is not converted)
/// - "." -> None (malformed)
pub fn parse_value(raw: &str, notation: Notation) -> Option<f64> {
    if notation == Notation::ScaledExponent {
        return None;
    }

    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '\u{2212}' { '-' } else { c })
        .collect();
    match compact.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        Ok(_) | Err(_) => {
            log::debug!("could not parse numeral '{}'", raw);
            None
        }
    }
}
