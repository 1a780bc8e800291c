//! `GET /theme-sync.js` — the pre-hydration theme bootstrap.
//!
//! The body is generated from `themesync` constants at startup so the script
//! and the client's cookie codec always agree on the wire format.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub async fn theme_sync_script(State(state): State<AppState>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8".to_owned()),
            (header::CACHE_CONTROL, format!("public, max-age={}", state.script_max_age_secs)),
        ],
        state.theme_script.to_string(),
    )
        .into_response()
}

#[cfg(test)]
#[path = "theme_sync_test.rs"]
mod tests;
