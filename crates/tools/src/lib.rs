//! Tool-invocation surface for the project catalog.
//!
//! Tools: `find_projects`, `create_new_project_folder`,
//! `create_readme_in_folder`, `projector_status`. Each one takes JSON params
//! and returns JSON, so any RPC layer can expose them by name through the
//! [`ToolRegistry`].

pub mod context;
pub mod create_folder;
pub mod create_readme;
pub mod find_projects;
pub mod registry;
pub mod status;

pub use {
    context::ProjectorContext,
    registry::{AgentTool, ToolRegistry},
    status::welcome_prompt,
};
