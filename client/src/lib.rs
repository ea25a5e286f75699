//! # client
//!
//! Leptos + WASM frontend for Exam Prep: a login screen backed by the hosted
//! auth provider and a workspace that uploads study material to the
//! generation backend and renders the returned question/answer pairs.
//!
//! Outbound calls go through the `gateway` crate; this crate contributes the
//! browser transport, session storage, navigation, and the UI.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
