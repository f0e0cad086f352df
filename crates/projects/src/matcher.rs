//! Keyword matching over the catalog.
//!
//! A project's *searchable set* is its explicit keywords plus the
//! whitespace-split words of its title, all lowercased. Query keywords are
//! compared against that set as whole tokens; there is no substring or fuzzy
//! matching and no ranking. Results keep catalog order.

use std::collections::HashSet;

use {projector_common::FilterStrategy, tracing::debug};

#[cfg(feature = "metrics")]
use projector_metrics::{counter, labels, search as search_metrics};

use crate::{error::Result, store::CatalogStore, types::Project};

/// Lowercased, trimmed query keywords.
///
/// Blank keywords stay in the query as empty tokens. No searchable set ever
/// contains an empty token, so a blank keyword never matches.
pub fn normalize_query<S: AsRef<str>>(query: &[S]) -> Vec<String> {
    query
        .iter()
        .map(|kw| kw.as_ref().trim().to_lowercase())
        .collect()
}

/// Build the set of tokens a project can be matched on.
pub fn searchable_set(project: &Project) -> HashSet<String> {
    project
        .keywords
        .iter()
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .chain(project.title.split_whitespace().map(str::to_lowercase))
        .collect()
}

/// Whether a single project satisfies the already-normalized query.
///
/// `ALL` over an empty query is vacuously true, `ANY` over an empty query is
/// false.
pub fn matches(project: &Project, query: &[String], strategy: FilterStrategy) -> bool {
    let terms = searchable_set(project);
    match strategy {
        FilterStrategy::All => query.iter().all(|kw| terms.contains(kw)),
        FilterStrategy::Any => query.iter().any(|kw| terms.contains(kw)),
    }
}

/// Return the projects matching `query` under `strategy`, in input order.
pub fn find<S: AsRef<str>>(
    query: &[S],
    projects: &[Project],
    strategy: FilterStrategy,
) -> Vec<Project> {
    let query = normalize_query(query);
    projects
        .iter()
        .filter(|p| matches(p, &query, strategy))
        .cloned()
        .collect()
}

/// Load the catalog and match `query` against it.
///
/// The catalog is read on every call; a missing or broken catalog is an
/// error, never an empty result.
pub async fn search<S: AsRef<str> + Sync>(
    store: &dyn CatalogStore,
    query: &[S],
    strategy: FilterStrategy,
) -> Result<Vec<Project>> {
    let projects = store.load().await?;
    let found = find(query, &projects, strategy);
    debug!(
        strategy = %strategy,
        catalog = projects.len(),
        matched = found.len(),
        "evaluated keyword query"
    );
    #[cfg(feature = "metrics")]
    {
        counter!(search_metrics::QUERIES_TOTAL, labels::STRATEGY => strategy.operator())
            .increment(1);
        counter!(search_metrics::MATCHES_TOTAL).increment(found.len() as u64);
    }
    Ok(found)
}
