//! `create_readme_in_folder` tool: writes a templated README.md into a
//! project folder.
//!
//! Refusals (README already present, folder missing, path not a folder) are
//! reported in the result with a `status` field instead of failing the call;
//! the caller is expected to relay them, not retry.

use std::path::PathBuf;

use {
    anyhow::Result,
    async_trait::async_trait,
    projector_projects::{Error, readme::write_readme},
    serde_json::{Value, json},
};

use crate::registry::AgentTool;

pub struct CreateReadmeTool;

#[async_trait]
impl AgentTool for CreateReadmeTool {
    fn name(&self) -> &str {
        "create_readme_in_folder"
    }

    fn description(&self) -> &str {
        "Create a README.md in an existing project folder with the title as heading and \
         the keywords as #hashtags. Never overwrites an existing README.md."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": ["folder_path", "title"],
            "properties": {
                "folder_path": {
                    "type": "string",
                    "description": "Folder to write README.md into"
                },
                "title": {
                    "type": "string",
                    "description": "Project title, used as the heading"
                },
                "keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Optional keywords, rendered as #tags"
                }
            }
        })
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let folder = params
            .get("folder_path")
            .and_then(|v| v.as_str())
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("missing 'folder_path' parameter"))?;
        let title = params
            .get("title")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("missing 'title' parameter"))?
            .to_string();
        let keywords: Vec<String> = match params.get("keywords") {
            None | Some(Value::Null) => Vec::new(),
            Some(v) => serde_json::from_value(v.clone())
                .map_err(|e| anyhow::anyhow!("'keywords' must be a list of strings: {e}"))?,
        };

        let target = folder.clone();
        let outcome =
            tokio::task::spawn_blocking(move || write_readme(&target, &title, &keywords)).await?;

        match outcome {
            Ok(path) => Ok(json!({
                "status": "created",
                "message": format!("Successfully created README.md in {}", folder.display()),
                "file_path": path.to_string_lossy(),
            })),
            Err(Error::DescriptionAlreadyExists { path }) => Ok(json!({
                "status": "exists",
                "message": format!("README.md already exists in {}", folder.display()),
                "file_path": path.to_string_lossy(),
            })),
            Err(Error::FolderNotFound { .. }) => Ok(json!({
                "status": "not_found",
                "message": format!("Folder does not exist: {}", folder.display()),
                "file_path": null,
            })),
            Err(Error::NotADirectory { .. }) => Ok(json!({
                "status": "not_a_directory",
                "message": format!("Path is not a directory: {}", folder.display()),
                "file_path": null,
            })),
            Err(e) => Err(e.into()),
        }
    }
}
