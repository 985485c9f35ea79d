mod commands;
mod output;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use pvalscan_core::ExtractOptions;
use std::path::PathBuf;

const MAX_BINS: u64 = 10_000;

#[derive(Parser)]
#[command(
    name = "pvalscan",
    version,
    about = "Extract p-value statements from scientific papers (PDF, HTML or text)"
)]
struct Cli {
    /// Log per-line filtering decisions (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract p-value statements from each document
    Extract {
        /// Paths to PDF, HTML or text files
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Output format: table (default), json or csv
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write CSV output to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Aggregate parsed p-values across documents into a histogram
    Histogram {
        /// Paths to PDF, HTML or text files
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Number of equal-width bins over [0, 1] (1 to 10000)
        #[arg(
            short,
            long,
            default_value_t = pvalscan_core::summary::DEFAULT_BIN_COUNT,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_BINS)
        )]
        bins: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        document: DocumentArgs,
    },
}

#[derive(Args)]
pub struct DocumentArgs {
    /// Keep the physical column layout when converting PDFs
    #[arg(long)]
    layout: bool,

    /// Keep p-values that follow a footnote marker such as "* p < .05"
    #[arg(long)]
    keep_footnotes: bool,

    /// Match operator glyphs exactly as decoded, without repair
    #[arg(long)]
    no_normalize: bool,
}

impl DocumentArgs {
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            suppress_footnotes: !self.keep_footnotes,
            normalize_glyphs: !self.no_normalize,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Extract {
            input_files,
            output,
            out,
            document,
        } => commands::extract::run(&input_files, &output, out, &document),
        Commands::Histogram {
            input_files,
            bins,
            output,
            document,
        } => commands::histogram::run(&input_files, bins, &output, &document),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
