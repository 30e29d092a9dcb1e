use super::Patterns;
use crate::discovery::{discover_directories, discover_files, DiscoveryError};
use crate::template::TemplateEngine;
use crate::utils::SCAFFOLD_FILE_NAME;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
}

/// Housekeeping flags for the scaffold pipeline. Flags combine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Write a blank modified document into each directory
    pub create_mod: bool,

    /// Delete existing corrected documents
    pub quit_flag: bool,

    /// Delete existing modified documents without merging
    pub delete_modified: bool,
}

/// Outcome of a scaffold run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,
    pub deleted_corrected: Vec<PathBuf>,
    pub deleted_modified: Vec<PathBuf>,
}

impl ScaffoldReport {
    fn extend(&mut self, other: ScaffoldReport) {
        self.created.extend(other.created);
        self.deleted_corrected.extend(other.deleted_corrected);
        self.deleted_modified.extend(other.deleted_modified);
    }
}

/// Run the scaffold/cleanup pipeline over every directory under
/// `base_directory` matching the directory pattern.
pub async fn run_scaffold(
    base_directory: &Path,
    patterns: &Patterns,
    options: ScaffoldOptions,
) -> Result<ScaffoldReport, ScaffoldError> {
    let engine = TemplateEngine::new();
    let directories = discover_directories(base_directory, &patterns.directory)?;

    let mut report = ScaffoldReport::default();

    for directory in directories {
        let result =
            scaffold_directory(base_directory, &directory, patterns, options, &engine).await?;
        report.extend(result);
    }

    Ok(report)
}

/// Apply the scaffold/cleanup flags to one directory.
///
/// Per-file failures are logged and skipped; they never abort sibling
/// files or directories.
pub async fn scaffold_directory(
    base_directory: &Path,
    directory: &Path,
    patterns: &Patterns,
    options: ScaffoldOptions,
    engine: &TemplateEngine,
) -> Result<ScaffoldReport, ScaffoldError> {
    info!(directory = %directory.display(), "Processing directory");

    let mut report = ScaffoldReport::default();

    if options.create_mod {
        match engine.render_blank_document(base_directory, directory).await {
            Ok(content) => {
                let scaffold_path = directory.join(SCAFFOLD_FILE_NAME);
                match fs::write(&scaffold_path, content).await {
                    Ok(()) => {
                        debug!(file = %scaffold_path.display(), "Blank modified document saved");
                        report.created.push(scaffold_path);
                    }
                    Err(e) => {
                        error!(
                            file = %scaffold_path.display(),
                            error = %e,
                            "Failed to save blank modified document"
                        );
                    }
                }
            }
            Err(e) => {
                error!(
                    directory = %directory.display(),
                    error = %e,
                    "Failed to render blank modified document"
                );
            }
        }
    }

    if options.quit_flag {
        let deleted = delete_matching(directory, &patterns.corrected, "corrected").await?;
        report.deleted_corrected.extend(deleted);
    }

    if options.delete_modified {
        let deleted = delete_matching(directory, &patterns.modified, "modified").await?;
        report.deleted_modified.extend(deleted);
    }

    Ok(report)
}

async fn delete_matching(
    directory: &Path,
    pattern: &str,
    kind: &str,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut deleted = Vec::new();

    for path in discover_files(directory, pattern)? {
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(file = %path.display(), "Deleted {kind} file");
                deleted.push(path);
            }
            Err(e) => {
                warn!(
                    file = %path.display(),
                    error = %e,
                    "Failed to delete {kind} file"
                );
            }
        }
    }

    Ok(deleted)
}
