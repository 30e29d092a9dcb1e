mod correct;
mod scaffold;

pub use correct::{
    correct_directory, run_correction, CorrectError, CorrectionResult, RunReport,
};
pub use scaffold::{
    run_scaffold, scaffold_directory, ScaffoldError, ScaffoldOptions, ScaffoldReport,
};

use crate::utils::{
    CORRECTED_FILE_PATTERN, DIRECTORY_PATTERN, MODIFIED_FILE_PATTERN, ORIGINAL_FILE_PATTERN,
};

/// File and directory patterns driving discovery.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub directory: String,
    pub original: String,
    pub modified: String,
    pub corrected: String,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            directory: DIRECTORY_PATTERN.to_string(),
            original: ORIGINAL_FILE_PATTERN.to_string(),
            modified: MODIFIED_FILE_PATTERN.to_string(),
            corrected: CORRECTED_FILE_PATTERN.to_string(),
        }
    }
}
