use crate::error::PvalError;
use crate::extraction::TextExtractor;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Reading-order output by default; `-layout` keeps the columns of a
/// two-column paper side by side, which joins unrelated sentences onto one
/// line, so it is opt-in.
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    pub fn with_layout(layout: bool) -> Self {
        PdftotextExtractor { layout }
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, PvalError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PvalError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| PvalError::Extraction(e.to_string()))?;

        let mut cmd = Command::new("pdftotext");
        cmd.arg("-enc").arg("UTF-8");
        if self.layout {
            cmd.arg("-layout");
        }
        let output = cmd
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PvalError::PdftotextNotFound
                } else {
                    PvalError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PvalError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        log::debug!("pdftotext produced {} bytes of text", text.len());
        Ok(join_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// pdftotext separates pages with a form feed; make each boundary a line break.
fn join_pages(text: &str) -> String {
    text.replace("\x0c", "\n")
}
