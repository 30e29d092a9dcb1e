use super::Patterns;
use crate::discovery::{discover_directories, discover_files, DiscoveryError};
use crate::document::{delete_document, load_document, save_document};
use crate::merge::compare_and_correct;
use crate::utils::corrected_path_for;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum CorrectError {
    #[error("No original documents found in {0}")]
    NoOriginalFound(String),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
}

/// Per-directory outcome of the correction pipeline.
#[derive(Debug, Clone, Default)]
pub struct CorrectionResult {
    /// Output files written (corrected siblings or overwritten originals)
    pub corrected: Vec<PathBuf>,

    /// Modified candidates skipped because of a load or merge failure
    pub skipped: Vec<PathBuf>,

    /// Consumed modified files deleted after a successful merge
    pub removed: Vec<PathBuf>,
}

impl CorrectionResult {
    fn extend(&mut self, other: CorrectionResult) {
        self.corrected.extend(other.corrected);
        self.skipped.extend(other.skipped);
        self.removed.extend(other.removed);
    }
}

/// Outcome of a full correction run over a base directory.
#[derive(Debug, Default)]
pub struct RunReport {
    pub directories_processed: u32,
    pub failed_directories: Vec<PathBuf>,
    pub totals: CorrectionResult,
}

/// Run the correction pipeline over every directory under
/// `base_directory` matching the directory pattern.
///
/// A failing directory is logged and does not stop the run; its path is
/// recorded in the report.
pub async fn run_correction(
    base_directory: &Path,
    patterns: &Patterns,
    save_corrected: bool,
) -> Result<RunReport, CorrectError> {
    let directories = discover_directories(base_directory, &patterns.directory)?;

    let mut report = RunReport::default();

    for directory in directories {
        match correct_directory(&directory, patterns, save_corrected).await {
            Ok(result) => {
                report.directories_processed += 1;
                report.totals.extend(result);
            }
            Err(e) => {
                error!(
                    directory = %directory.display(),
                    error = %e,
                    "Directory processing failed"
                );
                report.failed_directories.push(directory);
            }
        }
    }

    Ok(report)
}

/// Correct every modified document candidate in one directory.
///
/// For each original document, every modified candidate is loaded,
/// merged, written either as a corrected sibling (`save_corrected`) or
/// over the original's path, and then deleted. A failing candidate is
/// logged, recorded as skipped, and never aborts its siblings.
pub async fn correct_directory(
    directory: &Path,
    patterns: &Patterns,
    save_corrected: bool,
) -> Result<CorrectionResult, CorrectError> {
    info!(directory = %directory.display(), "Processing directory");

    let original_files = discover_files(directory, &patterns.original)?;
    if original_files.is_empty() {
        return Err(CorrectError::NoOriginalFound(
            directory.display().to_string(),
        ));
    }

    let mut result = CorrectionResult::default();

    for original_path in &original_files {
        let original = match load_document(original_path).await {
            Ok(document) => document,
            Err(e) => {
                error!(
                    file = %original_path.display(),
                    error = %e,
                    "Failed to load original document, skipping"
                );
                continue;
            }
        };

        let modified_files = discover_files(directory, &patterns.modified)?;

        for modified_path in &modified_files {
            let modified = match load_document(modified_path).await {
                Ok(document) => document,
                Err(e) => {
                    error!(
                        file = %modified_path.display(),
                        error = %e,
                        "Failed to load modified document, skipping"
                    );
                    result.skipped.push(modified_path.clone());
                    continue;
                }
            };

            let corrected = match compare_and_correct(&original, &modified) {
                Ok(corrected) => corrected,
                Err(e) => {
                    error!(
                        file = %modified_path.display(),
                        error = %e,
                        "Failed to merge modified document, skipping"
                    );
                    result.skipped.push(modified_path.clone());
                    continue;
                }
            };

            let output_path = if save_corrected {
                corrected_path_for(modified_path)
            } else {
                original_path.clone()
            };

            if let Err(e) = save_document(&corrected, &output_path).await {
                error!(
                    file = %output_path.display(),
                    error = %e,
                    "Failed to save corrected document, skipping"
                );
                result.skipped.push(modified_path.clone());
                continue;
            }

            debug!(file = %output_path.display(), "Corrected document saved");
            result.corrected.push(output_path);

            match delete_document(modified_path).await {
                Ok(()) => result.removed.push(modified_path.clone()),
                Err(e) => {
                    warn!(
                        file = %modified_path.display(),
                        error = %e,
                        "Failed to delete consumed modified document"
                    );
                }
            }

            info!(file = %modified_path.display(), "Processing completed");
        }
    }

    Ok(result)
}
