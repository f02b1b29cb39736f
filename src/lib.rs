//! # activity-board
//!
//! Leptos + WASM client for the extracurricular activities sign-up API.
//!
//! The crate fetches the activity catalog, renders it as cards with
//! participant rosters, and submits signup/unregister requests, reloading the
//! catalog after every successful change. `ActivityBoard` holds that flow;
//! pages and components only render state and forward user intent.
//!
//! Browser-only code (HTTP, timers, DOM access, mounting) is gated behind the
//! `csr` feature so the state and orchestration layers test natively.

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
