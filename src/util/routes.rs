//! Static route classifiers.
//!
//! DESIGN
//! ======
//! Pure string checks over the configured route lists. Nothing here touches
//! the route catalog; the gate decides when the catalog must be consulted.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::config::GateConfig;

/// How a path relates to the static route lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    AlwaysAllowed,
    ResourceDetail,
    Ordinary,
}

/// True when `path` is `prefix` followed by a `/` boundary.
///
/// `/roles/5` is under `/roles`; `/rolesextra` is not.
pub fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

/// Public routes bypass the gate. Plain prefix match, so `/login` also
/// covers `/login/sso`.
pub fn is_public_route<S: AsRef<str>>(path: &str, public_routes: &[S]) -> bool {
    public_routes.iter().any(|route| path.starts_with(route.as_ref()))
}

/// Exact match, or a sub-path that does not look like a resource detail page.
///
/// The carve-out keeps `/dashboard` from granting `/dashboard/42`.
pub fn is_always_allowed<S: AsRef<str>>(path: &str, always_allowed: &[S]) -> bool {
    always_allowed.iter().any(|route| {
        let route = route.as_ref();
        path == route || (is_under(path, route) && !is_resource_detail_page(path))
    })
}

/// Heuristic for an item page such as `/roles/5`.
///
/// Matches exactly two non-empty segments (trailing slash allowed) whose second
/// segment is shaped like an identifier. Paths containing `/create` never match.
pub fn is_resource_detail_page(path: &str) -> bool {
    if path.contains("/create") {
        return false;
    }
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let Some(rest) = trimmed.strip_prefix('/') else {
        return false;
    };
    let mut segments = rest.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(collection), Some(id), None) => !collection.is_empty() && looks_like_identifier(id),
        _ => false,
    }
}

/// Numeric ids, UUIDs, and 24-digit hex object ids.
fn looks_like_identifier(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    if segment.len() == 24 && segment.bytes().all(|b| b.is_ascii_hexdigit()) {
        return true;
    }
    uuid::Uuid::try_parse(segment).is_ok()
}

pub fn classify(path: &str, config: &GateConfig) -> RouteClass {
    if is_public_route(path, &config.public_routes) {
        RouteClass::Public
    } else if is_always_allowed(path, &config.always_allowed_routes) {
        RouteClass::AlwaysAllowed
    } else if is_resource_detail_page(path) {
        RouteClass::ResourceDetail
    } else {
        RouteClass::Ordinary
    }
}
