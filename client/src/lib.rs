//! # client
//!
//! Leptos frontend for the dealership site: public listings of new and used
//! vehicles, vehicle detail pages, and the login-gated admin dashboard.
//!
//! The crate compiles twice. With `ssr` it is linked into the Axum `server`
//! binary and renders every route on the server; with `hydrate` it is built
//! to WASM and takes over in the browser, where the auth token lives.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod validation;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
