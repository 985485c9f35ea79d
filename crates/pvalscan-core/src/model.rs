use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a p-value statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Lt,
    Gt,
    Eq,
}

impl Operator {
    /// Map a normalized operator character to an Operator.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '<' => Some(Operator::Lt),
            '>' => Some(Operator::Gt),
            '=' => Some(Operator::Eq),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Eq => "=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which numeric notation the value was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// `a*10^b`, never converted to a number.
    ScaledExponent,
    /// `1.2e-5`
    Scientific,
    /// `0.05`, `.05`, `5.`
    PlainDecimal,
}

/// An unfiltered, unparsed recognition result from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    /// Byte offset of the match within its line.
    pub start: usize,
    pub end: usize,
    /// Full matched text, marker through numeral (e.g. "p < 0.05").
    pub expression: String,
    pub operator: char,
    /// The numeric capture, embedded whitespace included.
    pub raw_value_text: String,
    pub notation: Notation,
}

/// A p-value statement extracted from one line of document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// 1-based line number within the normalized document text.
    pub line_number: usize,
    pub source_line: String,
    pub expression: String,
    pub operator: Operator,
    /// Parsed value; `None` for scaled-exponent notation or a malformed numeral.
    pub value: Option<f64>,
    pub raw_value_text: String,
    pub notation: Notation,
}

/// Outcome of converting a statement's numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueStatus {
    Parsed,
    /// Scaled-exponent notation; conversion is not attempted.
    Deferred,
    Malformed,
}

impl Statement {
    pub fn value_status(&self) -> ValueStatus {
        match (self.value, self.notation) {
            (Some(_), _) => ValueStatus::Parsed,
            (None, Notation::ScaledExponent) => ValueStatus::Deferred,
            (None, _) => ValueStatus::Malformed,
        }
    }
}

/// All statements found in one document, in order of appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatements {
    /// Where the document came from (path or URL), for reporting.
    pub source: String,
    pub statements: Vec<Statement>,
}

/// A document that could not be turned into text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSkip {
    pub source: String,
    pub reason: String,
}
