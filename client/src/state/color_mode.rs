//! Color-mode state container.
//!
//! DESIGN
//! ======
//! This is the framework side of theme handling: it owns the reactive mode
//! and its own defaulting rules. The cookie bridge only reads it and requests
//! changes through `util::color_mode::set_color_mode`.

#[cfg(test)]
#[path = "color_mode_test.rs"]
mod color_mode_test;

use themesync::ThemeMode;

/// Site-level color-mode options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorModeConfig {
    /// Mode used when nothing is stored and the system preference is ignored.
    pub default_mode: ThemeMode,
    /// Consult `prefers-color-scheme` before falling back to `default_mode`.
    pub respect_prefers_color_scheme: bool,
    /// Hide the navbar toggle.
    pub disable_switch: bool,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::Light,
            respect_prefers_color_scheme: true,
            disable_switch: false,
        }
    }
}

/// Current color mode as seen by components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorModeState {
    pub mode: ThemeMode,
    pub config: ColorModeConfig,
    /// Set once the client has resolved the initial mode after hydration.
    /// Server renders always see `false`.
    pub initialized: bool,
}

impl ColorModeState {
    #[must_use]
    pub fn new(config: ColorModeConfig) -> Self {
        Self { mode: config.default_mode, config, initialized: false }
    }

    /// Label shown on the toggle: the mode a click switches to.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.mode.is_dark() { "☀" } else { "☾" }
    }

    #[must_use]
    pub fn toggle_title(&self) -> &'static str {
        if self.mode.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
    }
}
