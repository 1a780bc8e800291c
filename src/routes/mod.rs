//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the theme bootstrap script and health check next to Leptos SSR
//! rendering under a single Axum router. Compiled assets are served from
//! `/pkg`; anything else falls through to the static directory.

pub mod theme_sync;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use std::path::PathBuf;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, SiteConfig};
use crate::state::AppState;

/// Routes that do not depend on Leptos.
pub fn site_routes(state: AppState) -> Router {
    Router::new()
        .route(themesync::bootstrap::SCRIPT_PATH, get(theme_sync::theme_sync_script))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site: bootstrap script + Leptos SSR at `/` + static files.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing `LEPTOS_*` environment or Cargo metadata).
pub fn app(config: &SiteConfig, state: AppState) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let static_service = ServeDir::new(&config.static_dir).append_index_html_on_directories(true);

    Ok(site_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(static_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
