//! Async seams between the gate and the backend.
//!
//! The browser build wires these to [`super::api::HttpApi`]; tests inject mocks.
//! Futures are `?Send` because everything runs on the single UI thread.

use async_trait::async_trait;

use super::types::{ApiError, PermissionSet, RouteCatalogResponse, User};

/// Resolves the routes the current user may visit.
#[async_trait(?Send)]
pub trait RouteSource {
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the body is malformed.
    async fn fetch_routes(&self) -> Result<RouteCatalogResponse, ApiError>;
}

/// Session re-validation and the UI-affordance permission set.
#[async_trait(?Send)]
pub trait SessionSource {
    /// `Ok(None)` means the server no longer recognizes the session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport or decode failures.
    async fn check_auth(&self) -> Result<Option<User>, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the body is malformed.
    async fn fetch_permissions(&self) -> Result<PermissionSet, ApiError>;
}
