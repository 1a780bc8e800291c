//! # client
//!
//! Leptos + WASM frontend for the docs site.
//!
//! This crate hosts the color-mode state container, the page shell that loads
//! the theme bootstrap script ahead of everything else, and the
//! `ThemeCookieBridge` that keeps the color mode in step with the `wjjw_theme`
//! cookie shared with the other `williamjwhite.me` sites.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: re-apply the cookie preference, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // The static bootstrap normally ran already; this covers it being blocked.
    if let Some(mode) = themesync::bootstrap::apply(&util::bootstrap::BrowserDocument) {
        log::debug!("bootstrap applied {mode} from cookie");
    }

    leptos::mount::hydrate_body(app::App);
}
