//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Only the pages the gate itself needs live here; feature pages mount under
//! the same `RouteGate`.

pub mod access_denied;
pub mod dashboard;
pub mod under_construction;
