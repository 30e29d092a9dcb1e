use std::path::{Path, PathBuf};

/// Default base directory to search for workflow directories
pub const DEFAULT_BASE_DIRECTORY: &str = ".";

/// Pattern matching the workflow directories under the base directory
pub const DIRECTORY_PATTERN: &str = "*";

/// Pattern matching original workflow documents
pub const ORIGINAL_FILE_PATTERN: &str = "original*.json";

/// Pattern matching modified workflow documents
pub const MODIFIED_FILE_PATTERN: &str = "modified*.json";

/// Pattern matching corrected workflow documents
pub const CORRECTED_FILE_PATTERN: &str = "corrected*.json";

/// File name used when scaffolding a blank modified document
pub const SCAFFOLD_FILE_NAME: &str = "modified.json";

/// File name of an optional user-supplied scaffold template
pub const SCAFFOLD_TEMPLATE_NAME: &str = "modified.json.hbs";

/// Get the output path for a corrected document next to a consumed
/// modified document. The substring "modified" in the file name is
/// replaced with "corrected".
pub fn corrected_path_for(modified_path: &Path) -> PathBuf {
    let file_name = modified_path
        .file_name()
        .map(|n| n.to_string_lossy().replace("modified", "corrected"))
        .unwrap_or_else(|| "corrected.json".to_string());
    modified_path.with_file_name(file_name)
}

/// Get current timestamp in ISO 8601 format
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrected_path_for() {
        let path = Path::new("/tmp/flows/modified_checkout.json");
        assert_eq!(
            corrected_path_for(path),
            PathBuf::from("/tmp/flows/corrected_checkout.json")
        );
    }

    #[test]
    fn test_corrected_path_plain_name() {
        let path = Path::new("modified.json");
        assert_eq!(corrected_path_for(path), PathBuf::from("corrected.json"));
    }
}
