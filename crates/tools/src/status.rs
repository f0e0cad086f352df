//! Liveness/version status and the welcome prompt.

use {
    anyhow::Result,
    async_trait::async_trait,
    serde_json::{Value, json},
};

use crate::registry::AgentTool;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct StatusTool {
    server_name: String,
}

impl StatusTool {
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
        }
    }
}

#[async_trait]
impl AgentTool for StatusTool {
    fn name(&self) -> &str {
        "projector_status"
    }

    fn description(&self) -> &str {
        "Report whether the projector service is running and its version."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _params: Value) -> Result<Value> {
        Ok(json!({
            "status": "running",
            "message": format!("{} is operational", self.server_name),
            "version": VERSION,
        }))
    }
}

/// Greeting listing what the service can do, for agent prompts.
pub fn welcome_prompt(server_name: &str) -> String {
    format!(
        "Welcome to {server_name}! Available tools: find_projects (search projects by \
         keywords), create_new_project_folder (create date-based project folders), and \
         create_readme_in_folder (generate README.md files with templates)."
    )
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_running_with_version() {
        let out = StatusTool::new("Projector").execute(json!({})).await.unwrap();
        assert_eq!(out["status"], "running");
        assert_eq!(out["message"], "Projector is operational");
        assert_eq!(out["version"], VERSION);
    }

    #[test]
    fn welcome_lists_tools() {
        let text = welcome_prompt("Projector");
        assert!(text.starts_with("Welcome to Projector!"));
        for tool in [
            "find_projects",
            "create_new_project_folder",
            "create_readme_in_folder",
        ] {
            assert!(text.contains(tool));
        }
    }
}
