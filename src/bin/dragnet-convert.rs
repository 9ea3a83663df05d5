// Dragnet - PII Directory Scanner
// Copyright (c) 2025 Dragnet Contributors
// Licensed under the MIT License

//! Batch office-to-PDF conversion utility
//!
//! Separate from the scanner: converts word-processor, spreadsheet and
//! presentation documents to PDF through headless LibreOffice, either for a
//! list of files or a whole directory.

use clap::{CommandFactory, Parser};
use dragnet::config::LoggingConfig;
use dragnet::core::convert::PdfConverter;
use dragnet::logging::init_logging;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

/// Convert documents to PDF using LibreOffice
#[derive(Parser, Debug)]
#[command(name = "dragnet-convert")]
#[command(version, about, long_about = None)]
#[command(author = "Dragnet Contributors")]
struct ConvertCli {
    /// Files to convert, or a single directory to convert wholesale
    pub inputs: Vec<PathBuf>,

    /// Output directory for the produced PDFs
    #[arg(short, long, default_value = "converted_pdfs")]
    pub out_dir: PathBuf,

    /// Per-file conversion timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,

    /// Recurse into subdirectories when converting a directory
    #[arg(long)]
    pub recursive: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DRAGNET_LOG_LEVEL")]
    pub log_level: Option<String>,
}

fn main() {
    let _ = dotenvy::dotenv();

    let cli = ConvertCli::parse();

    // No inputs is a help request, not an error
    if cli.inputs.is_empty() {
        let _ = ConvertCli::command().print_help();
        process::exit(0);
    }

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level, &LoggingConfig::default()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    let converter = match PdfConverter::new(&cli.out_dir, Duration::from_secs(cli.timeout_secs)) {
        Ok(converter) => converter,
        Err(e) => {
            tracing::error!(error = %e, "Converter setup failed");
            eprintln!("Error: {e}");
            process::exit(5);
        }
    };

    let outcome = if cli.inputs.len() == 1 && cli.inputs[0].is_dir() {
        match converter.convert_directory(&cli.inputs[0], cli.recursive) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Directory conversion failed");
                eprintln!("Error: {e}");
                process::exit(5);
            }
        }
    } else {
        converter.convert_batch(&cli.inputs)
    };

    for (input, pdf) in &outcome.successful {
        println!("converted {} -> {}", input.display(), pdf.display());
    }
    for (input, reason) in &outcome.failed {
        eprintln!("failed    {}: {reason}", input.display());
    }
    println!(
        "Conversion complete: {} succeeded, {} failed",
        outcome.successful.len(),
        outcome.failed.len()
    );

    process::exit(if outcome.failed.is_empty() { 0 } else { 1 });
}
