use anyhow::Context;
use clap::Parser;
use flowmend::pipeline::{run_correction, run_scaffold, Patterns, ScaffoldOptions};
use flowmend::utils::{
    CORRECTED_FILE_PATTERN, DEFAULT_BASE_DIRECTORY, DIRECTORY_PATTERN, MODIFIED_FILE_PATTERN,
    ORIGINAL_FILE_PATTERN,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Flowmend - reconcile modified workflow documents against their originals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base directory to start searching for workflow directories
    #[arg(env = "FLOWMEND_BASE_DIR", default_value = DEFAULT_BASE_DIRECTORY)]
    base_directory: PathBuf,

    /// Create a blank modified document in each workflow directory
    #[arg(long = "mod")]
    create_mod: bool,

    /// Delete existing corrected documents
    #[arg(long = "quit")]
    quit_flag: bool,

    /// Delete existing modified documents without merging
    #[arg(long = "no-mod")]
    delete_modified: bool,

    /// Merge and save corrected documents next to the consumed modified files
    #[arg(long = "save")]
    save: bool,

    /// Merge modified documents into the original documents in place
    #[arg(long = "no-save", conflicts_with = "save")]
    no_save: bool,

    /// Pattern matching workflow directories under the base directory
    #[arg(long, env = "FLOWMEND_DIR_PATTERN", default_value = DIRECTORY_PATTERN)]
    dir_pattern: String,

    /// Pattern matching original documents
    #[arg(long, env = "FLOWMEND_ORIGINAL_PATTERN", default_value = ORIGINAL_FILE_PATTERN)]
    original_pattern: String,

    /// Pattern matching modified documents
    #[arg(long, env = "FLOWMEND_MODIFIED_PATTERN", default_value = MODIFIED_FILE_PATTERN)]
    modified_pattern: String,

    /// Pattern matching corrected documents
    #[arg(long, env = "FLOWMEND_CORRECTED_PATTERN", default_value = CORRECTED_FILE_PATTERN)]
    corrected_pattern: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to initialize logging")?;

    // Parse CLI arguments
    let args = Args::parse();

    let patterns = Patterns {
        directory: args.dir_pattern,
        original: args.original_pattern,
        modified: args.modified_pattern,
        corrected: args.corrected_pattern,
    };

    if args.create_mod || args.quit_flag || args.delete_modified {
        let options = ScaffoldOptions {
            create_mod: args.create_mod,
            quit_flag: args.quit_flag,
            delete_modified: args.delete_modified,
        };

        let report = run_scaffold(&args.base_directory, &patterns, options)
            .await
            .context("Scaffold run failed")?;

        info!(
            created = report.created.len(),
            deleted_corrected = report.deleted_corrected.len(),
            deleted_modified = report.deleted_modified.len(),
            "Scaffold run finished"
        );
    }

    if args.save || args.no_save {
        let report = run_correction(&args.base_directory, &patterns, args.save)
            .await
            .context("Correction run failed")?;

        info!(
            directories = report.directories_processed,
            failed_directories = report.failed_directories.len(),
            corrected = report.totals.corrected.len(),
            skipped = report.totals.skipped.len(),
            "Correction run finished"
        );
    }

    Ok(())
}
