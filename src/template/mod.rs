use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::utils::{now_iso, SCAFFOLD_TEMPLATE_NAME};

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Built-in scaffold for a blank modified document. Users replace the
/// content wholesale before running a merge.
const BLANK_DOCUMENT_TEMPLATE: &str = r#"{
  "workflow": {
    "name": "{{directory}}",
    "title": "",
    "display_name": ""
  },
  "variables": [],
  "scaffolded_at": "{{created_at}}"
}
"#;

/// Context available to scaffold templates.
#[derive(Debug, Serialize)]
pub struct ScaffoldContext {
    pub directory: String,
    pub created_at: String,
}

pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let handlebars = Handlebars::new();
        Self { handlebars }
    }

    /// Render the blank modified document for a workflow directory.
    ///
    /// A user template at `<base_directory>/modified.json.hbs` takes
    /// precedence over the built-in scaffold.
    pub async fn render_blank_document(
        &self,
        base_directory: &Path,
        directory: &Path,
    ) -> Result<String, TemplateError> {
        let template = self.load_override(base_directory).await?;
        let template = template.as_deref().unwrap_or(BLANK_DOCUMENT_TEMPLATE);

        let context = ScaffoldContext {
            directory: directory
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            created_at: now_iso(),
        };

        self.handlebars
            .render_template(template, &context)
            .map_err(TemplateError::from)
    }

    async fn load_override(&self, base_directory: &Path) -> Result<Option<String>, TemplateError> {
        let template_path = base_directory.join(SCAFFOLD_TEMPLATE_NAME);

        if template_path.exists() {
            let content = fs::read_to_string(&template_path).await?;
            Ok(Some(content))
        } else {
            Ok(None)
        }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn test_default_scaffold_is_valid_json() {
        let temp_dir = tempfile::tempdir().expect("Should create temp dir");
        let engine = TemplateEngine::new();

        let rendered = engine
            .render_blank_document(temp_dir.path(), Path::new("/flows/checkout"))
            .await
            .expect("Should render");

        let document: Value = serde_json::from_str(&rendered).expect("Should parse");
        assert_eq!(document["workflow"]["name"], "checkout");
        assert!(document["variables"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_template_overrides_default() {
        let temp_dir = tempfile::tempdir().expect("Should create temp dir");
        let template_path = temp_dir.path().join(SCAFFOLD_TEMPLATE_NAME);
        std::fs::write(&template_path, r#"{"custom": "{{directory}}"}"#)
            .expect("Should write template");

        let engine = TemplateEngine::new();
        let rendered = engine
            .render_blank_document(temp_dir.path(), Path::new("orders"))
            .await
            .expect("Should render");

        let document: Value = serde_json::from_str(&rendered).expect("Should parse");
        assert_eq!(document["custom"], "orders");
    }
}
