use glob::Pattern;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

fn compile_pattern(pattern: &str) -> Result<Pattern, DiscoveryError> {
    Pattern::new(pattern).map_err(|source| DiscoveryError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn name_matches(path: &Path, pattern: &Pattern) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| pattern.matches(n))
        .unwrap_or(false)
}

/// Find directories directly under `base_path` whose names match the
/// glob pattern. Enumeration order is whatever the walker yields; it is
/// not sorted.
pub fn discover_directories(
    base_path: &Path,
    pattern: &str,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern = compile_pattern(pattern)?;

    let directories = WalkDir::new(base_path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .filter(|e| name_matches(e.path(), &pattern))
        .map(|e| e.into_path())
        .collect();

    Ok(directories)
}

/// Find files directly inside `directory` whose names match the glob
/// pattern.
pub fn discover_files(directory: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern = compile_pattern(pattern)?;

    let files = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| name_matches(e.path(), &pattern))
        .map(|e| e.into_path())
        .collect();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = discover_files(Path::new("."), "[");
        assert!(matches!(
            result,
            Err(DiscoveryError::InvalidPattern { .. })
        ));
    }
}
