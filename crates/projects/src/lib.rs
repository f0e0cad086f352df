//! Project catalog search and project folder provisioning.
//!
//! Two independent workflows share no mutable state:
//!
//! - search: [`CatalogStore`] loads the catalog, [`matcher`] picks the entries
//!   matching a keyword query under a [`FilterStrategy`];
//! - creation: [`FolderProvisioner`] claims the next free `p<YYYYMMDD><a-z>`
//!   folder, [`readme::write_readme`] drops a templated `README.md` into it.

pub mod error;
pub mod matcher;
pub mod provision;
pub mod readme;
pub mod store;
pub mod types;

pub use {
    error::{CatalogSource, Error, Result},
    projector_common::FilterStrategy,
    provision::FolderProvisioner,
    store::{CatalogStore, FileCatalogStore},
    types::{FolderIdentifier, Project, ProjectSummary, ProvisionedFolder},
};
