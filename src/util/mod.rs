//! Route gate logic shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is framework-independent so it can be tested without a
//! reactive runtime; `components::route_gate` wires it to Leptos.

pub mod gate;
pub mod gate_controller;
pub mod routes;
pub mod session_refresh;
