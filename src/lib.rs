//! # ai-tools-hub
//!
//! Leptos + WASM front end for the AI Tools Hub directory site.
//! Lists curated third-party AI tools by category with client-side search
//! and filtering, plus account pages (login, signup, password reset) backed
//! by an external REST auth API and a local click-history page.
//!
//! The catalog itself is compiled in (`catalog::data`); the only network
//! traffic is the individual auth calls in `net::api`. Everything persisted
//! (session, theme, click history) goes through the typed stores in `state`
//! backed by `util::storage`.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
