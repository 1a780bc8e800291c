//! Color-mode initialization, application and persistence.
//!
//! Resolves the initial mode from `localStorage` (which the theme bootstrap
//! seeds from the shared cookie), then the system preference, then the
//! configured default. Applying a mode sets the `data-theme` attribute on
//! `<html>` and persists it under the framework's own storage key.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely no-op
//! to keep server rendering deterministic.

#[cfg(test)]
#[path = "color_mode_test.rs"]
mod color_mode_test;

use leptos::prelude::*;
use themesync::ThemeMode;

use crate::state::color_mode::{ColorModeConfig, ColorModeState};

/// The storage key this framework reads its initial mode from.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = themesync::bootstrap::STORAGE_KEYS[0];

/// Resolve the initial mode for `config`.
pub fn read_preference(config: &ColorModeConfig) -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return config.default_mode;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(mode) = storage.get_item(STORAGE_KEY).ok().flatten().and_then(|v| v.parse().ok()) {
                return mode;
            }
        }

        if config.respect_prefers_color_scheme {
            if let Ok(Some(mq)) = window.match_media("(prefers-color-scheme: dark)") {
                return if mq.matches() { ThemeMode::Dark } else { ThemeMode::Light };
            }
        }

        config.default_mode
    }
    #[cfg(not(feature = "hydrate"))]
    {
        config.default_mode
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute(themesync::bootstrap::THEME_ATTRIBUTE, mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Persist `mode` under the framework's storage key.
pub fn persist(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Switch the color mode: the framework's "request mode change" entry point.
pub fn set_color_mode(state: RwSignal<ColorModeState>, mode: ThemeMode) {
    apply(mode);
    persist(mode);
    if state.with_untracked(|s| s.mode) != mode {
        state.update(|s| s.mode = mode);
    }
}

/// Flip the current mode and return the new one.
pub fn toggle(state: RwSignal<ColorModeState>) -> ThemeMode {
    let next = next_mode(state.with_untracked(|s| s.mode));
    set_color_mode(state, next);
    next
}

/// Mode a toggle moves to from `current`.
pub fn next_mode(current: ThemeMode) -> ThemeMode {
    current.toggled()
}

/// Resolve the initial mode once the client is running.
///
/// Effects never run during SSR, so server output always reflects the
/// configured default and hydration sees identical markup.
pub fn init(state: RwSignal<ColorModeState>) {
    Effect::new(move |_| {
        let config = state.with_untracked(|s| s.config);
        let mode = read_preference(&config);
        apply(mode);
        state.update(|s| {
            s.mode = mode;
            s.initialized = true;
        });
    });
}
