//! # rentalcar
//!
//! Leptos + WASM front end for the car rental catalog. Fetches brands and
//! car listings from the remote rental API, renders car cards, and keeps a
//! favorites list persisted in `localStorage` across page reloads.
//!
//! This crate contains pages, components, application state, the rental API
//! client, and browser storage glue. The favorites store in [`state::favorites`]
//! owns the hydration handshake between the server-rendered default and the
//! persisted client state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
