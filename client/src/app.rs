//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use themesync::bootstrap::SCRIPT_PATH;

use crate::components::theme_cookie_bridge::ThemeCookieBridge;
use crate::pages::home::HomePage;
use crate::state::color_mode::{ColorModeConfig, ColorModeState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The theme bootstrap is the first script in `<head>` and is neither `async`
/// nor `defer`, so it runs before the stylesheet paints or the bundle loads.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <script src=SCRIPT_PATH></script>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the color-mode context, mounts the cookie bridge once under it,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let color_mode = RwSignal::new(ColorModeState::new(ColorModeConfig::default()));
    provide_context(color_mode);
    crate::util::color_mode::init(color_mode);

    view! {
        <Stylesheet id="leptos" href="/pkg/wjjw-docs.css"/>
        <Title text="William J. White — Developer Guides"/>
        <ThemeCookieBridge/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
