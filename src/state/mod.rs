//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `catalog`, `permissions`, etc.) so the
//! gate and the components can depend on small focused models.

pub mod auth;
pub mod catalog;
pub mod catalog_cache;
pub mod navigation;
pub mod permissions;
pub mod ui;
