//! `find_projects` tool: keyword search over the project catalog.

use std::sync::Arc;

use {
    anyhow::Result,
    async_trait::async_trait,
    projector_projects::{CatalogStore, FilterStrategy, Project, ProjectSummary, matcher},
    serde::Deserialize,
    serde_json::{Value, json},
};

use crate::registry::AgentTool;

#[derive(Debug, Default, Deserialize)]
struct FindParams {
    #[serde(default)]
    keywords: Vec<String>,
}

pub struct FindProjectsTool {
    store: Arc<dyn CatalogStore>,
    strategy: FilterStrategy,
}

impl FindProjectsTool {
    pub fn new(store: Arc<dyn CatalogStore>, strategy: FilterStrategy) -> Self {
        Self { store, strategy }
    }
}

#[async_trait]
impl AgentTool for FindProjectsTool {
    fn name(&self) -> &str {
        "find_projects"
    }

    fn description(&self) -> &str {
        "Find projects by keywords (case-insensitive, whole words). Keywords are matched \
         against each project's tags and the words of its title. Whether a project must \
         match all or any of the keywords is fixed by the server configuration. Returns \
         the id and title of each matching project."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": ["keywords"],
            "properties": {
                "keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Keywords to search for"
                }
            }
        })
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let params: FindParams = if params.is_null() {
            FindParams::default()
        } else {
            serde_json::from_value(params)?
        };

        let found = matcher::search(self.store.as_ref(), &params.keywords, self.strategy).await?;
        let projects: Vec<ProjectSummary> = found.iter().map(Project::summary).collect();

        let criteria = format!(
            "{} keywords: {} (using {} strategy)",
            self.strategy.quantifier(),
            params.keywords.join(", "),
            self.strategy.operator()
        );
        let message = if projects.is_empty() {
            format!("No projects found matching {criteria}")
        } else {
            format!("Found {} projects matching {criteria}", projects.len())
        };

        Ok(json!({
            "message": message,
            "projects": projects,
        }))
    }
}
