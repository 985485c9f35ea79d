pub mod html;
pub mod pdftotext;
pub mod plain;

use crate::error::PvalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Trait for document-to-text backends.
pub trait TextExtractor: Send + Sync {
    /// Decode a document into plain text, lines separated by `\n`.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, PvalError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Html,
    Text,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Html => write!(f, "HTML"),
            DocumentKind::Text => write!(f, "text"),
        }
    }
}

impl DocumentKind {
    /// Detect the kind from a file extension, falling back to the content.
    pub fn detect(path: &Path, bytes: &[u8]) -> DocumentKind {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("html" | "htm" | "xhtml") => DocumentKind::Html,
            Some("txt" | "text") => DocumentKind::Text,
            _ => DocumentKind::sniff(bytes),
        }
    }

    /// Guess the kind from the first bytes of a document.
    pub fn sniff(bytes: &[u8]) -> DocumentKind {
        if bytes.starts_with(b"%PDF-") {
            return DocumentKind::Pdf;
        }

        let head = String::from_utf8_lossy(&bytes[..bytes.len().min(512)]).to_lowercase();
        let head = head.trim_start_matches('\u{feff}').trim_start();
        if head.starts_with("<!doctype html") || head.starts_with("<html") {
            DocumentKind::Html
        } else {
            DocumentKind::Text
        }
    }
}

/// Backend for a document kind, with default settings.
pub fn extractor_for(kind: DocumentKind) -> Box<dyn TextExtractor> {
    match kind {
        DocumentKind::Pdf => Box::new(pdftotext::PdftotextExtractor::new()),
        DocumentKind::Html => Box::new(html::HtmlExtractor),
        DocumentKind::Text => Box::new(plain::PlainTextExtractor),
    }
}
