//! Keeps the color-mode context and the shared theme cookie convergent.
//!
//! ARCHITECTURE
//! ============
//! `themesync::bridge::ThemeBridge` holds the rules; this component wires it to
//! Leptos: one effect tracks the color mode (mount on its first initialized
//! run, cookie write on every run after), and window listeners for `focus`
//! and `visibilitychange` pull in changes made by sibling sites or tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`, below the `RwSignal<ColorModeState>` context. Renders
//! nothing.

use leptos::prelude::*;
use themesync::ThemeMode;
use themesync::bridge::{ColorModeHost, ThemeBridge};

use crate::state::color_mode::ColorModeState;
use crate::util::color_mode::set_color_mode;
use crate::util::theme_cookie::BrowserCookies;

/// The color-mode context viewed as the bridge's accessor/mutator pair.
#[derive(Clone, Copy)]
struct SignalColorMode(RwSignal<ColorModeState>);

impl ColorModeHost for SignalColorMode {
    fn current(&self) -> ThemeMode {
        self.0.with_untracked(|s| s.mode)
    }

    fn request(&self, mode: ThemeMode) {
        set_color_mode(self.0, mode);
    }
}

/// Invisible component reconciling color mode with the `wjjw_theme` cookie.
#[component]
pub fn ThemeCookieBridge() -> impl IntoView {
    let color_mode = expect_context::<RwSignal<ColorModeState>>();
    let bridge = ThemeBridge::new(SignalColorMode(color_mode), BrowserCookies);

    let on_change = bridge.clone();
    Effect::new(move |_| {
        let (mode, initialized) = color_mode.with(|s| (s.mode, s.initialized));
        if !initialized {
            return;
        }
        // A requested change reruns this effect, which then writes the adopted mode.
        if on_change.mount() {
            return;
        }
        on_change.color_mode_changed(mode);
    });

    #[cfg(feature = "hydrate")]
    {
        let on_focus = bridge.clone();
        let focus = window_event_listener(leptos::ev::focus, move |_| {
            if on_focus.is_mounted() {
                on_focus.focus();
            }
        });

        let on_visibility = bridge;
        let visibility = window_event_listener_untyped("visibilitychange", move |_| {
            if on_visibility.is_mounted() {
                on_visibility.visibility_changed(document().hidden());
            }
        });

        on_cleanup(move || {
            focus.remove();
            visibility.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bridge;
    }
}
