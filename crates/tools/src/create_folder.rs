//! `create_new_project_folder` tool: claims today's next `p<YYYYMMDD><a-z>` folder.

use {
    anyhow::Result,
    async_trait::async_trait,
    projector_projects::FolderProvisioner,
    serde_json::{Value, json},
};

use crate::registry::AgentTool;

pub struct CreateFolderTool {
    provisioner: FolderProvisioner,
}

impl CreateFolderTool {
    pub fn new(provisioner: FolderProvisioner) -> Self {
        Self { provisioner }
    }
}

#[async_trait]
impl AgentTool for CreateFolderTool {
    fn name(&self) -> &str {
        "create_new_project_folder"
    }

    fn description(&self) -> &str {
        "Create a new project folder named pYYYYMMDD<letter> for today's date (e.g. \
         p20250621a). If folders for today already exist the next free letter is used. \
         Returns the folder id and its path."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _params: Value) -> Result<Value> {
        let provisioner = self.provisioner.clone();
        let folder = tokio::task::spawn_blocking(move || provisioner.create_next_folder()).await??;

        Ok(json!({
            "status": "created",
            "message": format!("Successfully created folder: {}", folder.id),
            "folder_id": folder.id,
            "folder_path": folder.path.to_string_lossy(),
        }))
    }
}
