//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DragnetConfig;
use crate::domain::errors::DragnetError;
use crate::domain::result::Result;
use std::path::Path;

/// Default configuration file, used when present and no path was given
const DEFAULT_CONFIG_FILE: &str = "dragnet.toml";

/// Loads configuration
///
/// This function:
/// 1. Starts from built-in defaults
/// 2. Merges the TOML file at `path`, if one was given (missing file is an
///    error); otherwise merges `dragnet.toml` from the working directory if
///    it exists
/// 3. Applies environment variable overrides (`DRAGNET_*` prefix)
/// 4. Validates the result
///
/// # Errors
///
/// Returns [`DragnetError::Configuration`] if an explicitly given file cannot
/// be read, TOML parsing fails, or validation fails.
pub fn load_config(path: Option<&Path>) -> Result<DragnetConfig> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(DragnetError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            parse_file(path)?
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                parse_file(default)?
            } else {
                DragnetConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(DragnetError::Configuration)?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<DragnetConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        DragnetError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: DragnetConfig = toml::from_str(&contents)?;
    tracing::debug!(path = %path.display(), "Configuration file loaded");
    Ok(config)
}

/// Applies environment variable overrides using the DRAGNET_* prefix
///
/// Variables follow the pattern `DRAGNET_<SECTION>_<KEY>`, for example
/// `DRAGNET_EXTRACTION_PDF_DPI` or `DRAGNET_DETECTION_FUZZY_THRESHOLD`.
/// Unparseable values are ignored in favor of the current setting.
fn apply_env_overrides(config: &mut DragnetConfig) {
    // Scan overrides
    if let Ok(val) = std::env::var("DRAGNET_SCAN_RECURSIVE") {
        if let Ok(recursive) = val.parse() {
            config.scan.recursive = recursive;
        }
    }
    if let Ok(val) = std::env::var("DRAGNET_SCAN_REPORT_PREFIX") {
        config.scan.report_prefix = val;
    }
    if let Ok(val) = std::env::var("DRAGNET_SCAN_MAX_FILE_SIZE_MB") {
        if let Ok(limit) = val.parse() {
            config.scan.max_file_size_mb = Some(limit);
        }
    }

    // Extraction overrides
    if let Ok(val) = std::env::var("DRAGNET_EXTRACTION_PDF_DPI") {
        if let Ok(dpi) = val.parse() {
            config.extraction.pdf_dpi = dpi;
        }
    }
    if let Ok(val) = std::env::var("DRAGNET_EXTRACTION_PROBE_DPI") {
        if let Ok(dpi) = val.parse() {
            config.extraction.probe_dpi = dpi;
        }
    }
    if let Ok(val) = std::env::var("DRAGNET_EXTRACTION_LANGUAGES") {
        let languages: Vec<String> = val
            .split(',')
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty())
            .collect();
        if !languages.is_empty() {
            config.extraction.languages = languages;
        }
    }

    // Detection overrides
    if let Ok(val) = std::env::var("DRAGNET_DETECTION_FUZZY_THRESHOLD") {
        if let Ok(threshold) = val.parse() {
            config.detection.fuzzy_threshold = threshold;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("DRAGNET_LOGGING_LOCAL_ENABLED") {
        if let Ok(enabled) = val.parse() {
            config.logging.local_enabled = enabled;
        }
    }
    if let Ok(val) = std::env::var("DRAGNET_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_missing_explicit_file() {
        let result = load_config(Some(Path::new("nonexistent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid_file() {
        let toml_content = r#"
[scan]
recursive = false
report_prefix = "pii_report"

[extraction]
pdf_dpi = 300
languages = ["eng", "deu"]

[detection]
fuzzy_threshold = 90.0
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(Some(temp_file.path())).unwrap();
        assert!(!config.scan.recursive);
        assert_eq!(config.scan.report_prefix, "pii_report");
        assert_eq!(config.extraction.pdf_dpi, 300);
        assert_eq!(config.extraction.languages, vec!["eng", "deu"]);
        assert_eq!(config.detection.fuzzy_threshold, 90.0);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[detection]\nfuzzy_threshold = 250.0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let result = load_config(Some(temp_file.path()));
        assert!(matches!(result, Err(DragnetError::Configuration(_))));
    }

    #[test]
    fn test_env_override_languages() {
        let mut config = DragnetConfig::default();
        std::env::set_var("DRAGNET_EXTRACTION_LANGUAGES", "eng, fra");
        apply_env_overrides(&mut config);
        std::env::remove_var("DRAGNET_EXTRACTION_LANGUAGES");

        assert_eq!(config.extraction.languages, vec!["eng", "fra"]);
    }

    #[test]
    fn test_env_override_threshold() {
        let mut config = DragnetConfig::default();
        std::env::set_var("DRAGNET_DETECTION_FUZZY_THRESHOLD", "85.5");
        apply_env_overrides(&mut config);
        std::env::remove_var("DRAGNET_DETECTION_FUZZY_THRESHOLD");

        assert_eq!(config.detection.fuzzy_threshold, 85.5);
    }
}
