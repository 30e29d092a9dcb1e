use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Document not found at {0}")]
    NotFound(String),
}

/// Load a workflow document from the given path.
///
/// Returns `DocumentError::NotFound` if the file vanished between
/// discovery and load, and `DocumentError::Parse` for malformed or
/// empty content.
pub async fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DocumentError::NotFound(path.display().to_string())
        } else {
            DocumentError::Io(e)
        }
    })?;

    let document: Value = serde_json::from_str(&content)?;
    Ok(document)
}

/// Save a workflow document to the given path.
///
/// Output is 2-space indented; object key order is the tree's insertion
/// order.
pub async fn save_document(document: &Value, path: &Path) -> Result<(), DocumentError> {
    let content = serde_json::to_string_pretty(document)?;
    fs::write(path, content).await?;
    Ok(())
}

/// Remove a consumed document from disk.
pub async fn delete_document(path: &Path) -> Result<(), DocumentError> {
    fs::remove_file(path).await?;
    Ok(())
}
