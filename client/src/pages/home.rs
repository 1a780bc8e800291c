//! Docs landing page.
//!
//! Content and navigation are supplied by the docs generator; this page only
//! carries the navbar chrome the theme toggle lives in and links back to the
//! sibling site sharing the theme cookie.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Marketing site on the apex domain.
pub const MAIN_SITE: &str = "https://williamjwhite.me";

/// Docs landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a href="/" class="navbar__title">"William J. White"</a>
            <a href=MAIN_SITE class="navbar__link">"Main Site"</a>
            <span class="navbar__spacer"></span>
            <ThemeToggle/>
        </nav>
        <main class="docs">
            <h1>"Developer Guides"</h1>
            <p>"Documentation, guides, deep dives, projects, and reference material."</p>
        </main>
    }
}
