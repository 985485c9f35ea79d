use pvalscan_core::error::PvalError;
use std::path::PathBuf;

use crate::commands::{extract_all, report_skips};
use crate::output;
use crate::DocumentArgs;

pub fn run(
    input_files: &[PathBuf],
    output_format: &str,
    output_file: Option<PathBuf>,
    document: &DocumentArgs,
) -> Result<(), PvalError> {
    let (documents, skipped) = extract_all(input_files, document);

    if documents.is_empty() && !skipped.is_empty() {
        report_skips(&skipped);
        return Err(PvalError::UnsupportedDocument(
            "none of the input documents could be read".into(),
        ));
    }

    match output_file {
        Some(path) => {
            // Always write CSV when saving to file
            std::fs::write(&path, output::csv::format_documents(&documents))?;
            let count: usize = documents.iter().map(|d| d.statements.len()).sum();
            eprintln!(
                "Extracted {} statement(s) from {} document(s), written to {}",
                count,
                documents.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&documents)?,
            "csv" => print!("{}", output::csv::format_documents(&documents)),
            _ => output::table::print_documents(&documents),
        },
    }

    if !skipped.is_empty() {
        eprintln!("{} document(s) skipped:", skipped.len());
        report_skips(&skipped);
    }

    Ok(())
}
