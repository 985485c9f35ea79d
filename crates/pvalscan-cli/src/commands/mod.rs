pub mod extract;
pub mod histogram;

use pvalscan_core::extraction::pdftotext::PdftotextExtractor;
use pvalscan_core::extraction::{extractor_for, DocumentKind, TextExtractor};
use pvalscan_core::model::{DocumentSkip, DocumentStatements};
use std::path::{Path, PathBuf};

use crate::DocumentArgs;

/// Run every input through extraction. A document that cannot be read or
/// converted is skipped; the rest still run.
pub fn extract_all(
    input_files: &[PathBuf],
    args: &DocumentArgs,
) -> (Vec<DocumentStatements>, Vec<DocumentSkip>) {
    let mut documents = Vec::new();
    let mut skipped = Vec::new();

    for path in input_files {
        let source = path.display().to_string();
        match extract_one(path, &source, args) {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                log::warn!("skipping {}: {}", source, e);
                skipped.push(DocumentSkip {
                    source,
                    reason: e.to_string(),
                });
            }
        }
    }

    (documents, skipped)
}

fn extract_one(
    path: &Path,
    source: &str,
    args: &DocumentArgs,
) -> Result<DocumentStatements, pvalscan_core::error::PvalError> {
    let bytes = std::fs::read(path)?;
    let kind = DocumentKind::detect(path, &bytes);
    log::debug!("{}: detected {} document", source, kind);
    let extractor: Box<dyn TextExtractor> = match kind {
        DocumentKind::Pdf => Box::new(PdftotextExtractor::with_layout(args.layout)),
        _ => extractor_for(kind),
    };
    pvalscan_core::extract_document(source, &bytes, extractor.as_ref(), &args.options())
}

pub fn report_skips(skipped: &[DocumentSkip]) {
    for skip in skipped {
        eprintln!("  skipped {}: {}", skip.source, skip.reason);
    }
}
