//! Metric name and label definitions.
//!
//! All metric names used by projector live here so the exported surface is
//! documented in one place.

/// Catalog store metrics
pub mod catalog {
    /// Total number of catalog loads attempted
    pub const LOADS_TOTAL: &str = "projector_catalog_loads_total";
    /// Catalog loads that failed (missing or malformed file)
    pub const LOAD_ERRORS_TOTAL: &str = "projector_catalog_load_errors_total";
    /// Number of entries in the most recently loaded catalog
    pub const ENTRIES: &str = "projector_catalog_entries";
}

/// Keyword matcher metrics
pub mod search {
    /// Total number of keyword queries evaluated
    pub const QUERIES_TOTAL: &str = "projector_search_queries_total";
    /// Total number of projects returned across all queries
    pub const MATCHES_TOTAL: &str = "projector_search_matches_total";
}

/// Folder provisioner metrics
pub mod provision {
    /// Total number of project folders created
    pub const FOLDERS_CREATED_TOTAL: &str = "projector_folders_created_total";
    /// Suffix candidates skipped because the name was already taken
    pub const SUFFIX_COLLISIONS_TOTAL: &str = "projector_suffix_collisions_total";
    /// Provisioning attempts that failed
    pub const ERRORS_TOTAL: &str = "projector_provision_errors_total";
}

/// Description writer metrics
pub mod readme {
    /// Total number of README files written
    pub const WRITTEN_TOTAL: &str = "projector_readmes_written_total";
    /// README writes refused (existing file, missing folder)
    pub const REFUSED_TOTAL: &str = "projector_readmes_refused_total";
}

/// Common label keys
pub mod labels {
    pub const STRATEGY: &str = "strategy";
    pub const REASON: &str = "reason";
}
