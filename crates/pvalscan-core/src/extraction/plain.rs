use crate::error::PvalError;
use crate::extraction::TextExtractor;

/// Backend for text that is already extracted. Invalid UTF-8 is replaced,
/// never rejected.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, PvalError> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn backend_name(&self) -> &str {
        "plain"
    }
}
