//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! theme bootstrap script is rendered once at startup and shared read-only.

use std::sync::Arc;

use crate::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    /// Rendered `themesync::bootstrap::script()`.
    pub theme_script: Arc<str>,
    /// `Cache-Control` max-age for the bootstrap script.
    pub script_max_age_secs: u64,
}

impl AppState {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            theme_script: Arc::from(themesync::bootstrap::script()),
            script_max_age_secs: config.script_max_age_secs,
        }
    }
}
