//! REST helpers for the session and permission endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every call returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; the gate and the session
//! refresher decide how much of a failure to surface (currently: a log line).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::source::{RouteSource, SessionSource};
use super::types::{ApiError, PermissionSet, RouteCatalogResponse, User};

fn current_user_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/me")
}

fn route_catalog_endpoint(api_base: &str) -> String {
    format!("{api_base}/permissions/routes/me")
}

fn permissions_endpoint(api_base: &str) -> String {
    format!("{api_base}/permissions/me")
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// HTTP implementation of [`RouteSource`] and [`SessionSource`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    api_base: String,
}

impl HttpApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !is_success(resp.status()) {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
async fn get_json<T: serde::de::DeserializeOwned>(_url: &str) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}

#[async_trait(?Send)]
impl RouteSource for HttpApi {
    async fn fetch_routes(&self) -> Result<RouteCatalogResponse, ApiError> {
        get_json(&route_catalog_endpoint(&self.api_base)).await
    }
}

#[async_trait(?Send)]
impl SessionSource for HttpApi {
    async fn check_auth(&self) -> Result<Option<User>, ApiError> {
        match get_json::<User>(&current_user_endpoint(&self.api_base)).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn fetch_permissions(&self) -> Result<PermissionSet, ApiError> {
        get_json(&permissions_endpoint(&self.api_base)).await
    }
}
