//! Office-to-PDF batch conversion
//!
//! Separate utility, not on the scan path: converts word-processor,
//! spreadsheet and presentation documents to PDF through a headless
//! LibreOffice instance. Shipped as the `dragnet-convert` binary.

use crate::domain::errors::DragnetError;
use crate::domain::result::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// Well-known LibreOffice locations, checked before falling back to `PATH`
const KNOWN_PATHS: [&str; 4] = [
    "/usr/bin/libreoffice",
    "/usr/bin/soffice",
    "/Applications/LibreOffice.app/Contents/MacOS/soffice",
    r"C:\Program Files\LibreOffice\program\soffice.exe",
];

/// Executable names searched on `PATH`
const PATH_NAMES: [&str; 2] = ["libreoffice", "soffice"];

/// Result tally of a batch conversion
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Input path → produced PDF path
    pub successful: Vec<(PathBuf, PathBuf)>,
    /// Input path → failure reason
    pub failed: Vec<(PathBuf, String)>,
}

/// Converts documents to PDF via headless LibreOffice
pub struct PdfConverter {
    soffice: PathBuf,
    output_dir: PathBuf,
    timeout: Duration,
}

impl PdfConverter {
    /// Locate LibreOffice and prepare the output directory
    ///
    /// # Errors
    ///
    /// Returns [`DragnetError::Conversion`] if no LibreOffice installation
    /// can be found.
    pub fn new(output_dir: impl Into<PathBuf>, timeout: Duration) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;

        let soffice = find_libreoffice().ok_or_else(|| {
            DragnetError::Conversion(
                "LibreOffice not found; install it (e.g. apt-get install libreoffice) \
                 or put soffice on PATH"
                    .to_string(),
            )
        })?;

        tracing::debug!(soffice = %soffice.display(), "LibreOffice located");

        Ok(Self {
            soffice,
            output_dir,
            timeout,
        })
    }

    /// Convert a single file to PDF, returning the produced PDF path
    ///
    /// A file that already is a PDF is returned unchanged.
    pub fn convert_to_pdf(&self, input: &Path) -> Result<PathBuf> {
        if !input.exists() {
            return Err(DragnetError::Conversion(format!(
                "File not found: {}",
                input.display()
            )));
        }

        if input
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        {
            tracing::debug!(file = %input.display(), "Already a PDF");
            return Ok(input.to_path_buf());
        }

        tracing::info!(file = %input.display(), "Converting to PDF");

        let mut child = Command::new(&self.soffice)
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(&self.output_dir)
            .arg(input)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DragnetError::Conversion(format!("Failed to start LibreOffice: {e}")))?;

        let status = wait_with_timeout(&mut child, self.timeout).map_err(|e| {
            DragnetError::Conversion(format!("Conversion of {} failed: {e}", input.display()))
        })?;

        if !status.success() {
            return Err(DragnetError::Conversion(format!(
                "LibreOffice exited with {status} for {}",
                input.display()
            )));
        }

        let stem = input
            .file_stem()
            .ok_or_else(|| {
                DragnetError::Conversion(format!("No file stem in {}", input.display()))
            })?
            .to_string_lossy();
        let output = self.output_dir.join(format!("{stem}.pdf"));

        if output.exists() {
            Ok(output)
        } else {
            Err(DragnetError::Conversion(format!(
                "PDF was not created for {}",
                input.display()
            )))
        }
    }

    /// Convert several files, tallying successes and failures
    ///
    /// One failing file never stops the batch.
    pub fn convert_batch(&self, inputs: &[PathBuf]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for input in inputs {
            match self.convert_to_pdf(input) {
                Ok(pdf) => outcome.successful.push((input.clone(), pdf)),
                Err(e) => {
                    tracing::warn!(file = %input.display(), reason = %e, "Conversion failed");
                    outcome.failed.push((input.clone(), e.to_string()));
                }
            }
        }
        outcome
    }

    /// Convert every convertible file under `directory`
    ///
    /// PDFs and hidden files are skipped.
    pub fn convert_directory(&self, directory: &Path, recursive: bool) -> Result<BatchOutcome> {
        if !directory.is_dir() {
            return Err(DragnetError::Conversion(format!(
                "Not a directory: {}",
                directory.display()
            )));
        }

        let mut walker = WalkDir::new(directory).min_depth(1);
        if !recursive {
            walker = walker.max_depth(1);
        }

        let files: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                let hidden = path
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().starts_with('.'));
                let pdf = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
                !hidden && !pdf
            })
            .collect();

        tracing::info!(count = files.len(), "Found files to convert");
        Ok(self.convert_batch(&files))
    }
}

/// Locate the LibreOffice executable
fn find_libreoffice() -> Option<PathBuf> {
    for candidate in KNOWN_PATHS {
        let path = Path::new(candidate);
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        for name in PATH_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Wait for a child process, killing it if the timeout elapses
fn wait_with_timeout(
    child: &mut std::process::Child,
    timeout: Duration,
) -> std::io::Result<std::process::ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            child.kill()?;
            child.wait()?;
            return Err(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!("timed out after {}s", timeout.as_secs()),
            ));
        }
        std::thread::sleep(Duration::from_millis(100));
    }
}
