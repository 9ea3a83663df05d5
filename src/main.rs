// Dragnet - PII Directory Scanner
// Copyright (c) 2025 Dragnet Contributors
// Licensed under the MIT License

use clap::{CommandFactory, Parser};
use dragnet::adapters::{OfficeParser, PdfiumRasterizer, TesseractOcr};
use dragnet::cli::Cli;
use dragnet::config::{load_config, DragnetConfig};
use dragnet::core::scan::{ScanCoordinator, ScanSummary};
use dragnet::domain::RuleSet;
use dragnet::logging::init_logging;
use std::path::Path;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // No directory is a help request, not an error
    let Some(directory) = cli.directory.clone() else {
        let _ = Cli::command().print_help();
        process::exit(0);
    };

    // Load configuration and apply CLI overrides
    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };
    cli.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation failed: {e}");
        process::exit(2);
    }

    // Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        directory = %directory.display(),
        "Dragnet - PII Directory Scanner"
    );

    // Execute the scan and get the exit code
    let exit_code = match run(&cli, &config, &directory) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Scan failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the scan
fn run(cli: &Cli, config: &DragnetConfig, directory: &Path) -> dragnet::domain::Result<i32> {
    // Rules are mandatory: a scan cannot proceed without them
    let rules = match RuleSet::from_file(&cli.rules) {
        Ok(rules) => rules,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load rules");
            eprintln!("Error: {e}");
            return Ok(2); // Configuration error exit code
        }
    };
    tracing::info!(
        rules = %cli.rules.display(),
        categories = rules.len(),
        "Rules loaded"
    );

    // One-time capability initialization, before any file is processed.
    // Failure here is fatal - it would otherwise fail on every single file.
    let ocr = TesseractOcr::new(&config.extraction.languages)?;
    let rasterizer = PdfiumRasterizer::new()?;
    let parser = OfficeParser::new();

    let coordinator = ScanCoordinator::new(config, &rules, &ocr, &rasterizer, &parser);
    let summary = coordinator.run(directory)?;

    print_summary(&summary);
    Ok(0)
}

fn print_summary(summary: &ScanSummary) {
    println!();
    println!("Scan complete:");
    println!("  Files scanned: {}", summary.files_scanned);
    println!("  Files failed:  {}", summary.files_failed);
    println!("  PII findings:  {}", summary.total_findings);
    println!("  Report:        {}", summary.artifact_path.display());
    println!("  Duration:      {:.1}s", summary.duration.as_secs_f64());
}
