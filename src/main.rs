//! Merge Day NFT mint page
//!
//! Single-page Leptos app: connect a browser wallet, pay 0.05 ETH or more,
//! and watch the card flip once the mint confirms.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Merge Day mint page starting...");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen once the WASM bundle is live.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        if let Some(element) = loading.dyn_ref::<HtmlElement>() {
            element.class_list().add_1("hidden").ok();
        }
        loading
            .set_attribute("style", "display: none !important;")
            .ok();
    } else {
        log::warn!("loading element not found");
    }
}
