//! Reusable UI components.

pub mod route_gate;
