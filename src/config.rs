//! Gate configuration: static route lists and endpoint base path.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route lists are deployment data, not logic. The browser build reads an
//! optional JSON override from the host page; everything else uses defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Paths reachable without a session. Matched by plain prefix.
pub const PUBLIC_ROUTES: &[&str] = &[
    "/login",
    "/register",
    "/forgot-password",
    "/reset-password",
    "/verify-email",
    "/amazon/callback",
];

/// Paths every authenticated user may visit regardless of the route catalog.
pub const ALWAYS_ALLOWED_ROUTES: &[&str] = &["/", "/dashboard", "/profile", "/access-denied"];

pub const ACCESS_DENIED_PATH: &str = "/access-denied";
pub const UNDER_CONSTRUCTION_COMPONENT: &str = "UnderConstruction";
pub const DEFAULT_API_BASE: &str = "/api";

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "apexscouty-config";

/// Errors produced while loading [`GateConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override document is not valid JSON for this schema.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configured route does not start with `/`.
    #[error("invalid path in {field}: {path:?}")]
    InvalidPath { field: &'static str, path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub public_routes: Vec<String>,
    pub always_allowed_routes: Vec<String>,
    pub access_denied_path: String,
    pub under_construction_component: String,
    pub api_base: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            public_routes: PUBLIC_ROUTES.iter().map(|p| (*p).to_owned()).collect(),
            always_allowed_routes: ALWAYS_ALLOWED_ROUTES.iter().map(|p| (*p).to_owned()).collect(),
            access_denied_path: ACCESS_DENIED_PATH.to_owned(),
            under_construction_component: UNDER_CONSTRUCTION_COMPONENT.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl GateConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidPath`] for routes that are not absolute.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim_end_matches('/').to_owned();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_paths("public_routes", &self.public_routes)?;
        check_paths("always_allowed_routes", &self.always_allowed_routes)?;
        check_paths("access_denied_path", std::slice::from_ref(&self.access_denied_path))
    }
}

fn check_paths(field: &'static str, paths: &[String]) -> Result<(), ConfigError> {
    match paths.iter().find(|p| !p.starts_with('/')) {
        Some(path) => Err(ConfigError::InvalidPath { field, path: path.clone() }),
        None => Ok(()),
    }
}

/// Load the gate configuration for this page.
///
/// In the browser, reads the JSON text of the element with id
/// [`CONFIG_ELEMENT_ID`]. A missing element means defaults; an invalid one is
/// logged and also falls back to defaults.
pub fn load() -> GateConfig {
    match read_override() {
        Some(raw) => GateConfig::from_json(&raw).unwrap_or_else(|e| {
            leptos::logging::warn!("ignoring gate config override: {e}");
            GateConfig::default()
        }),
        None => GateConfig::default(),
    }
}

#[cfg(feature = "csr")]
fn read_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

#[cfg(not(feature = "csr"))]
fn read_override() -> Option<String> {
    None
}
