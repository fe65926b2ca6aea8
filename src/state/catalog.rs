//! Route catalog: the server-resolved paths the current user may visit.
//!
//! DESIGN
//! ======
//! Plain data with lookup helpers. Mutation goes through
//! [`crate::state::catalog_cache::RouteCatalogCache`]; the gate only reads.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeMap;

use crate::net::types::{ApiError, RouteCatalogResponse};
use crate::util::routes::is_under;

/// Per-route rendering metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub component: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteCatalog {
    pub permitted_paths: Vec<String>,
    pub path_metadata: BTreeMap<String, RouteMeta>,
    pub loading: bool,
    /// Set by the first successful fetch; cleared by invalidation.
    pub fetched: bool,
    pub last_error: Option<ApiError>,
    /// Failed fetches since the session started.
    pub failures: u32,
}

impl RouteCatalog {
    /// Exact entry or any entry followed by a `/` boundary.
    pub fn has_access(&self, path: &str) -> bool {
        self.permitted_paths.iter().any(|p| p == path || is_under(path, p))
    }

    /// Metadata for `path`: exact key first, else the longest key `path` is under.
    pub fn metadata_for(&self, path: &str) -> Option<&RouteMeta> {
        if let Some(meta) = self.path_metadata.get(path) {
            return Some(meta);
        }
        self.path_metadata
            .iter()
            .filter(|(key, _)| is_under(path, key))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, meta)| meta)
    }

    pub fn renders_component(&self, path: &str, component: &str) -> bool {
        self.metadata_for(path)
            .and_then(|meta| meta.component.as_deref())
            .is_some_and(|c| c == component)
    }

    /// Replace paths and metadata with a fresh response.
    pub fn apply(&mut self, response: RouteCatalogResponse) {
        self.permitted_paths.clear();
        self.path_metadata.clear();
        for entry in response.routes {
            self.path_metadata
                .insert(entry.path.clone(), RouteMeta { component: entry.component });
            if !self.permitted_paths.contains(&entry.path) {
                self.permitted_paths.push(entry.path);
            }
        }
        self.fetched = true;
        self.last_error = None;
    }

    /// Drop cached routes so the next fetch goes to the network.
    pub fn invalidate(&mut self) {
        self.permitted_paths.clear();
        self.path_metadata.clear();
        self.fetched = false;
    }
}
