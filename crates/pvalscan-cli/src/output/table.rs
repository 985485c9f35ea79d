use pvalscan_core::model::{DocumentStatements, Statement, ValueStatus};
use pvalscan_core::summary::{Histogram, Tally, ALPHA};

const BAR_WIDTH: usize = 50;

pub fn print_documents(documents: &[DocumentStatements]) {
    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===\n", doc.source);

        if doc.statements.is_empty() {
            println!("  No p-values found.");
            continue;
        }

        let max_expr = doc
            .statements
            .iter()
            .map(|s| s.expression.chars().count())
            .max()
            .unwrap_or(10);

        for s in &doc.statements {
            println!(
                "  {:>5}  {:<width$}  {}",
                s.line_number,
                s.expression,
                format_value(s),
                width = max_expr
            );
        }

        let tally = Tally::from_statements(&doc.statements);
        println!(
            "\n  {} statement(s): {} '<', {} '=', {} '>'",
            tally.total(),
            tally.lt,
            tally.eq,
            tally.gt
        );
    }
}

fn format_value(s: &Statement) -> String {
    match (s.value_status(), s.value) {
        (ValueStatus::Parsed, Some(v)) => format!("{} {}", s.operator, v),
        (ValueStatus::Deferred, _) => "(not converted: scaled exponent)".to_string(),
        _ => format!("(unparseable: '{}')", s.raw_value_text),
    }
}

pub fn print_histogram(hist: &Histogram, tally: &Tally, document_count: usize) {
    println!(
        "{} p-value(s) from {} document(s), bin width {}\n",
        hist.total_binned(),
        document_count,
        hist.bin_width()
    );

    let max = hist.bins.iter().copied().max().unwrap_or(0);
    let alpha_bin = hist.bin_index(ALPHA);

    for (i, &count) in hist.bins.iter().enumerate() {
        if count == 0 && i != alpha_bin {
            continue;
        }
        let (lo, hi) = hist.bin_edges(i);
        let marker = if i == alpha_bin { "  <- 0.05" } else { "" };
        println!(
            "  [{:.3}, {:.3})  {:>6}  {}{}",
            lo,
            hi,
            count,
            bar(count, max),
            marker
        );
    }

    println!();
    println!(
        "  At or below {}: {} of {}",
        ALPHA,
        hist.at_or_below_alpha,
        hist.total_binned()
    );
    if hist.out_of_range > 0 {
        println!("  Outside [0, 1]: {}", hist.out_of_range);
    }
    if hist.unparsed > 0 {
        println!("  Without a parsed value: {}", hist.unparsed);
    }
    println!(
        "  Operators: {} '<', {} '=', {} '>'",
        tally.lt, tally.eq, tally.gt
    );
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "#".repeat(len)
}
