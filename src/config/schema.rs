//! Configuration schema types
//!
//! Every tunable the scan pipeline reads lives here; call sites never
//! hard-code thresholds or DPI values.

use serde::{Deserialize, Serialize};

/// Main dragnet configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DragnetConfig {
    /// Directory-walk settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Extraction settings (DPI, OCR languages)
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Detection settings (fuzzy threshold)
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DragnetConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.scan.validate()?;
        self.extraction.validate()?;
        self.detection.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Directory-walk settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Recurse into subdirectories (false scans only the top level)
    #[serde(default = "default_recursive")]
    pub recursive: bool,

    /// Filename prefix for report artifacts; also the self-exclusion marker
    #[serde(default = "default_report_prefix")]
    pub report_prefix: String,

    /// Skip files larger than this many megabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size_mb: Option<u64>,
}

impl ScanConfig {
    fn validate(&self) -> Result<(), String> {
        if self.report_prefix.trim().is_empty() {
            return Err("scan.report_prefix must not be empty".to_string());
        }
        if self.max_file_size_mb == Some(0) {
            return Err("scan.max_file_size_mb must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            recursive: default_recursive(),
            report_prefix: default_report_prefix(),
            max_file_size_mb: None,
        }
    }
}

/// Extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Rendering resolution for PDF page OCR
    ///
    /// Higher values improve recognition of small fonts at proportional cost
    /// in time and memory. Corpus-dependent; 400 is the shipped default.
    #[serde(default = "default_pdf_dpi")]
    pub pdf_dpi: u16,

    /// Rendering resolution for the single-page PDF classification probe
    #[serde(default = "default_probe_dpi")]
    pub probe_dpi: u16,

    /// Tesseract language identifiers (e.g. "eng", "deu")
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

impl ExtractionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pdf_dpi == 0 {
            return Err("extraction.pdf_dpi must be positive".to_string());
        }
        if self.probe_dpi == 0 {
            return Err("extraction.probe_dpi must be positive".to_string());
        }
        if self.languages.is_empty() {
            return Err("extraction.languages must not be empty".to_string());
        }
        if let Some(bad) = self
            .languages
            .iter()
            .find(|lang| lang.trim().is_empty() || lang.contains('+'))
        {
            return Err(format!(
                "extraction.languages entry '{bad}' is invalid; list languages individually"
            ));
        }
        Ok(())
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pdf_dpi: default_pdf_dpi(),
            probe_dpi: default_probe_dpi(),
            languages: default_languages(),
        }
    }
}

/// Detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Fuzzy keyword match threshold on the 0-100 similarity scale
    ///
    /// A token matches when its score strictly exceeds this value.
    /// Corpus-dependent; 80 is the shipped default.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

impl DetectionConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.fuzzy_threshold) {
            return Err("detection.fuzzy_threshold must be between 0 and 100".to_string());
        }
        Ok(())
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to a local file in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!(
                "logging.local_rotation must be 'daily' or 'hourly', got '{other}'"
            )),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_recursive() -> bool {
    true
}

fn default_report_prefix() -> String {
    "dragnet_report".to_string()
}

fn default_pdf_dpi() -> u16 {
    400
}

fn default_probe_dpi() -> u16 {
    100
}

fn default_languages() -> Vec<String> {
    vec!["eng".to_string()]
}

fn default_fuzzy_threshold() -> f64 {
    80.0
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
