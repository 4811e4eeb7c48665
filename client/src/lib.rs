//! # client
//!
//! Leptos + WASM storefront for Marquee: home, browse, top rentals, wishlist,
//! rental history, and the profile dashboard.
//!
//! Pages and components read shared state from Leptos context. The wishlist
//! is a `wishlist::Wishlist` over browser `localStorage`, with DOM events
//! wired into its notifier by `util::wishlist_sync`. Server rendering uses
//! the same components with browser-only paths compiled out.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
