//! Networking modules for the session and permission endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `source` defines the async seams the gate depends on, `api` implements
//! them over HTTP, and `types` defines the shared wire schema.

pub mod api;
pub mod source;
pub mod types;
