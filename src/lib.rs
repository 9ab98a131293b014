//! # authgate
//!
//! Leptos + WASM session gatekeeper for a single-page application.
//!
//! The app sits between a third-party identity provider and the backend's
//! own session tokens: it classifies every navigation as authorized or not,
//! runs the two-step exchange that turns an identity token into a backend
//! session token, and keeps the persisted token slots, the in-memory state,
//! and the remote response cache consistent across login and logout.
//!
//! The authorization core (`flow`, `session`) is plain Rust with no browser
//! dependency; localStorage, HTTP, and widget interop live behind the
//! `hydrate` feature.

#![allow(async_fn_in_trait)]

pub mod app;
pub mod config;
pub mod flow;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
