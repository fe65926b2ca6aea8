//! # apexscouty
//!
//! Leptos + WASM route authorization gate for the ApexScouty admin dashboard.
//!
//! Every navigation is checked against the signed-in user's route catalog
//! (the server-resolved list of paths they may open), a list of public paths,
//! and a list of always-allowed paths. A denial that might be stale gets one
//! forced catalog refresh before the user is sent to `/access-denied`.
//!
//! The decision logic in `util` and `state` is framework-independent;
//! `components::route_gate` wires it to the router.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
