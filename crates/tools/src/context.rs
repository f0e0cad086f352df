use std::sync::Arc;

use {
    projector_config::{ProjectorConfig, ProjectsSettings},
    projector_projects::{CatalogStore, FileCatalogStore, FilterStrategy, FolderProvisioner},
};

use crate::{
    create_folder::CreateFolderTool, create_readme::CreateReadmeTool,
    find_projects::FindProjectsTool, registry::ToolRegistry, status::StatusTool,
};

/// Everything the tools need, built once at startup and shared by reference.
#[derive(Clone)]
pub struct ProjectorContext {
    pub server_name: String,
    pub strategy: FilterStrategy,
    pub store: Arc<dyn CatalogStore>,
    pub provisioner: FolderProvisioner,
}

impl ProjectorContext {
    pub fn new(settings: &ProjectsSettings, server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            strategy: settings.strategy,
            store: Arc::new(FileCatalogStore::new(&settings.catalog)),
            provisioner: FolderProvisioner::new(&settings.root),
        }
    }

    /// Resolve the loaded config into a context. Fails if the root or the
    /// catalog path is unset.
    pub fn from_config(config: &ProjectorConfig) -> projector_config::Result<Self> {
        let settings = config.projects.resolve()?;
        Ok(Self::new(&settings, &config.server.name))
    }

    /// Registry with every projector tool registered.
    pub fn registry(&self) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(FindProjectsTool::new(
            Arc::clone(&self.store),
            self.strategy,
        )));
        registry.register(Box::new(CreateFolderTool::new(self.provisioner.clone())));
        registry.register(Box::new(CreateReadmeTool));
        registry.register(Box::new(StatusTool::new(&self.server_name)));
        registry
    }
}
