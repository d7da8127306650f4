//! # portal
//!
//! Leptos + WASM client for account registration, sign-in, and a signed-in
//! dashboard. All account logic lives behind the backend API; this crate owns
//! form validation, the session token in `localStorage`, and route gating.
//!
//! Pure logic (validation, form state transitions, error normalization, page
//! controllers) compiles and tests natively. Browser I/O is behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging, resolve config, mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::{App, ConfigErrorPage};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match config::ClientConfig::from_env() {
        Ok(config) => {
            log::info!("portal starting against {}", config.api_base_url);
            leptos::mount::mount_to_body(move || view! { <App config=config/> });
        }
        Err(e) => {
            log::error!("portal not configured: {e}");
            leptos::mount::mount_to_body(move || view! { <ConfigErrorPage error=e/> });
        }
    }
}
