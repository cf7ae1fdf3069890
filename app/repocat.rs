//! Command-line interface for repocat.
//!
//! Concatenates a repository's text files into a single stream, prefixed by a
//! tree-style directory listing. Diagnostics go to stderr, never into the
//! primary output.

use clap::{Parser, ValueEnum};
use repocat::{DigestBuilder, DigestResult, MAX_FILE_SIZE_DEFAULT_MB, digest, output};
use std::path::PathBuf;
use std::process::exit;

/// repocat — concatenate a repository's files for LLM ingestion
#[derive(Parser)]
#[command(name = "repocat", version, about, long_about = None)]
struct Cli {
    /// Path to the local repository directory
    repo_path: PathBuf,

    /// Glob pattern to include files, relative to the repo root
    /// (e.g. '*.py', 'src/*.js'); can be repeated
    #[arg(short = 'i', long = "include", value_name = "GLOB")]
    include_patterns: Vec<String>,

    /// Glob pattern to exclude files; takes precedence over includes;
    /// can be repeated
    #[arg(short = 'e', long = "exclude", value_name = "GLOB")]
    exclude_patterns: Vec<String>,

    /// File to write the output to (stdout if not given)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Maximum size for individual files in MB
    #[arg(long, value_name = "MB", default_value_t = MAX_FILE_SIZE_DEFAULT_MB)]
    max_file_size: f64,

    /// Do not warn when the directory has no .git marker
    #[arg(long)]
    no_git_check: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Print skipped files, reasons, and pattern translations to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let options = DigestBuilder::new(&cli.repo_path)
        .include_patterns(cli.include_patterns.clone())
        .exclude_patterns(cli.exclude_patterns.clone())
        .max_file_size_mb(cli.max_file_size)
        .no_git_check(cli.no_git_check)
        .verbose(cli.verbose)
        .build();

    let result = match digest(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    deliver(&result, &cli);
}

fn deliver(result: &DigestResult, cli: &Cli) {
    let format = cli.format.into();
    match &cli.output_file {
        Some(path) => {
            if let Err(e) = output::write_result_to_file(result, format, path, cli.pretty) {
                eprintln!("Error: {}", e);
                exit(1);
            }
            eprintln!("Output written to {}", path.display());
        }
        None => {
            print!("{}", output::format_result(result, format, cli.pretty));
        }
    }
}
