//! Browser access to the shared `wjjw_theme` cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wire format and scoping rules live in `themesync::cookie`; this module only
//! moves strings in and out of `document.cookie`. Outside the `hydrate` build,
//! or when the document refuses cookie access, reads are absent and writes
//! do nothing.

#[cfg(test)]
#[path = "theme_cookie_test.rs"]
mod theme_cookie_test;

use themesync::ThemeMode;
use themesync::bridge::CookieAccess;

/// [`CookieAccess`] over the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieAccess for BrowserCookies {
    fn read(&self) -> Option<ThemeMode> {
        read()
    }

    fn write(&self, mode: ThemeMode) {
        write(mode);
    }
}

/// Current preference from `document.cookie`, if any.
pub fn read() -> Option<ThemeMode> {
    cookie_header().as_deref().and_then(themesync::cookie::read_header)
}

/// Record `mode`, scoped to the parent domain on production hosts.
pub fn write(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = html_document() else {
            return;
        };
        let host = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        let scope = themesync::CookieScope::for_host(&host, themesync::cookie::DEFAULT_APEX_DOMAIN);
        if let Err(e) = doc.set_cookie(&themesync::cookie::encode(mode, &scope)) {
            log::debug!("theme cookie write failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Raw `document.cookie`, or `None` when unavailable.
pub fn cookie_header() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        html_document()?.cookie().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}
