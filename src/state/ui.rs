//! Gate-adjacent UI state shared through context.
//!
//! DESIGN
//! ======
//! Keeps presentation data (the denied path shown to the user, the sidebar
//! link list) out of the gate itself.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::catalog::RouteCatalog;

/// Navigation state carried to the access-denied view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeniedState {
    pub attempted_path: Option<String>,
}

/// Sidebar links derived from the route catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavLinks {
    pub paths: Vec<String>,
}

impl NavLinks {
    /// Top-level catalog entries in catalog order. Sub-routes are reachable
    /// from their parent page and do not get their own link.
    pub fn from_catalog(catalog: &RouteCatalog) -> Self {
        let paths = catalog
            .permitted_paths
            .iter()
            .filter(|p| p.len() > 1 && !p[1..].contains('/'))
            .cloned()
            .collect();
        Self { paths }
    }
}

/// `/billing-plans` -> `Billing plans`.
pub fn link_label(path: &str) -> String {
    let slug = path.trim_matches('/').replace(['-', '_'], " ");
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Home".to_owned(),
    }
}
