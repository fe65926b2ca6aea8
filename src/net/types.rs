//! Wire types for the session and permission endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the REST helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No HTTP client exists in this build (non-browser target).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// 401/403 mean the session itself is gone, not a transient failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403 })
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// The signed-in user as reported by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

// =============================================================================
// PERMISSIONS
// =============================================================================

/// One permitted route as returned by the route resolver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    /// Rendering override, e.g. `"UnderConstruction"`.
    #[serde(default)]
    pub component: Option<String>,
}

/// Response body of the "my permitted routes" endpoint. Order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCatalogResponse {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// Opaque permission names used for UI affordances (hide/disable actions).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    pub permissions: Vec<String>,
}
