pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod summary;

use error::PvalError;
use extraction::TextExtractor;
use model::{DocumentStatements, Statement};
use serde::{Deserialize, Serialize};

/// Options controlling the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Drop p-values that follow a footnote marker (`* p < .05`) on the same line.
    pub suppress_footnotes: bool,
    /// Repair operator glyphs corrupted by PDF decoding before matching.
    pub normalize_glyphs: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            suppress_footnotes: true,
            normalize_glyphs: true,
        }
    }
}

/// Main API entry point: extract p-value statements from document text.
///
/// Pure and total. The same text always yields the same statements, and
/// text without p-values yields an empty Vec.
pub fn extract(raw_text: &str) -> Vec<Statement> {
    extract_with(raw_text, &ExtractOptions::default())
}

pub fn extract_with(raw_text: &str, options: &ExtractOptions) -> Vec<Statement> {
    parsing::extract_statements(raw_text, options)
}

/// Convert a document to text with `extractor`, then extract its statements.
///
/// Only the text conversion can fail.
pub fn extract_document(
    source: &str,
    bytes: &[u8],
    extractor: &dyn TextExtractor,
    options: &ExtractOptions,
) -> Result<DocumentStatements, PvalError> {
    let text = extractor.extract_text(bytes)?;
    let statements = extract_with(&text, options);
    log::info!(
        "{}: {} statement(s) via {}",
        source,
        statements.len(),
        extractor.backend_name()
    );

    Ok(DocumentStatements {
        source: source.to_string(),
        statements,
    })
}
