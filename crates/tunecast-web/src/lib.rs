/// Tunecast web
///
/// Leptos UI for the Tunecast marketing site and customer dashboard, rendered
/// on the server and hydrated in the browser.

pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod router;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
