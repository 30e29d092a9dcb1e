//! Reconciliation of a user-edited workflow document against its
//! original.
//!
//! The merge is pure: it never touches disk and never aliases the
//! caller's trees. The corrected document starts as a clone of the
//! modified document and is reshaped to follow the original's key set,
//! key order, and variable ordering, while keeping the user's edits
//! everywhere else.

mod format;
mod identity;
mod structure;

pub use format::{normalize_string_formats, DEFAULT_STRING_FORMAT};
pub use identity::copy_workflow_identity;
pub use structure::correct_structure;

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Reconcile a modified workflow document against its original.
///
/// Runs the structural merge, then string-format normalization, then
/// the workflow identity copy, on a working clone of `modified`. Both
/// arguments are left untouched.
pub fn compare_and_correct(original: &Value, modified: &Value) -> Result<Value, MergeError> {
    let mut corrected = modified.clone();

    correct_structure(original, &mut corrected)?;
    normalize_string_formats(&mut corrected);
    copy_workflow_identity(modified, &mut corrected);

    Ok(corrected)
}
