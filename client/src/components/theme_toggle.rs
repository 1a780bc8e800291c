//! Navbar light/dark switch.

use leptos::prelude::*;

use crate::state::color_mode::ColorModeState;

/// Toggle button for the color mode. Hidden when the site disables switching.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let color_mode = expect_context::<RwSignal<ColorModeState>>();

    let on_click = move |_| {
        crate::util::color_mode::toggle(color_mode);
    };

    view! {
        <Show when=move || !color_mode.with(|s| s.config.disable_switch)>
            <button
                class="navbar__theme-toggle"
                title=move || color_mode.with(ColorModeState::toggle_title)
                aria-label=move || color_mode.with(ColorModeState::toggle_title)
                on:click=on_click
            >
                {move || color_mode.with(ColorModeState::toggle_label)}
            </button>
        </Show>
    }
}
