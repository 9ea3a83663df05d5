//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for dragnet using clap.
//! The scan directory is a positional argument; omitting it is treated as a
//! help request (usage is printed and the process exits 0).

use crate::config::DragnetConfig;
use clap::Parser;
use std::path::PathBuf;

/// Dragnet - PII directory scanner
#[derive(Parser, Debug)]
#[command(name = "dragnet")]
#[command(version, about, long_about = None)]
#[command(author = "Dragnet Contributors")]
pub struct Cli {
    /// Directory to scan
    pub directory: Option<PathBuf>,

    /// Path to the PII rules file (JSON)
    #[arg(short, long, default_value = "definitions.json", env = "DRAGNET_RULES")]
    pub rules: PathBuf,

    /// Path to configuration file (TOML); defaults to ./dragnet.toml if present
    #[arg(short, long, env = "DRAGNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DRAGNET_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Scan only the top level of the directory
    #[arg(long)]
    pub no_recursive: bool,

    /// Override the PDF OCR rendering DPI
    #[arg(long)]
    pub dpi: Option<u16>,

    /// Override the fuzzy keyword match threshold (0-100)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Comma-separated OCR language identifiers (e.g. "eng,deu")
    #[arg(long)]
    pub languages: Option<String>,
}

impl Cli {
    /// Apply CLI flags on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut DragnetConfig) {
        if self.no_recursive {
            tracing::info!("Shallow scan enabled from CLI");
            config.scan.recursive = false;
        }

        if let Some(dpi) = self.dpi {
            tracing::info!(dpi, "Overriding PDF DPI from CLI");
            config.extraction.pdf_dpi = dpi;
        }

        if let Some(threshold) = self.threshold {
            tracing::info!(threshold, "Overriding fuzzy threshold from CLI");
            config.detection.fuzzy_threshold = threshold;
        }

        if let Some(languages) = &self.languages {
            let languages: Vec<String> = languages
                .split(',')
                .map(|lang| lang.trim().to_string())
                .filter(|lang| !lang.is_empty())
                .collect();
            tracing::info!(languages = ?languages, "Overriding OCR languages from CLI");
            config.extraction.languages = languages;
        }
    }
}
