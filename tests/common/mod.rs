use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Should create temp dir")
}

pub fn create_workflow_dir(base: &Path, name: &str) -> PathBuf {
    let directory = base.join(name);
    std::fs::create_dir_all(&directory).expect("Should create workflow dir");
    directory
}

pub fn write_document(directory: &Path, file_name: &str, document: &Value) -> PathBuf {
    let path = directory.join(file_name);
    let content = serde_json::to_string_pretty(document).expect("Should serialize");
    std::fs::write(&path, content).expect("Should write document");
    path
}

pub fn read_document(path: &Path) -> Value {
    let content = std::fs::read_to_string(path).expect("Should read document");
    serde_json::from_str(&content).expect("Should parse document")
}
