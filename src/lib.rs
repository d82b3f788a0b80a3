// lib.rs - Root module for the product_manager library
//
// The web_app module holds both the browser-independent core (model,
// form validation, API client, screen state) and the Leptos UI.

pub mod web_app;

/// WASM entry point: hydrates the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    web_app::logging::init_browser_tracing();
    leptos::mount::hydrate_body(web_app::App);
}
