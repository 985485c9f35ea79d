use pvalscan_core::error::PvalError;
use pvalscan_core::summary::{Histogram, Tally};
use std::path::PathBuf;

use crate::commands::{extract_all, report_skips};
use crate::output;
use crate::DocumentArgs;

pub fn run(
    input_files: &[PathBuf],
    bins: usize,
    output_format: &str,
    document: &DocumentArgs,
) -> Result<(), PvalError> {
    let (documents, skipped) = extract_all(input_files, document);

    let statements = documents.iter().flat_map(|d| d.statements.iter());
    let histogram = Histogram::from_statements(statements.clone(), bins);
    let tally = Tally::from_statements(statements);

    match output_format {
        "json" => output::json::print(&histogram)?,
        _ => output::table::print_histogram(&histogram, &tally, documents.len()),
    }

    if !skipped.is_empty() {
        eprintln!("{} document(s) skipped:", skipped.len());
        report_skips(&skipped);
    }

    Ok(())
}
