//! Codec for the shared `wjjw_theme` cookie.
//!
//! DESIGN
//! ======
//! Reads operate on a `document.cookie` style header (`a=1; b=2`) and take the
//! first entry whose name matches exactly. Any failure along the way is
//! reported as an absent preference, never surfaced to callers.
//!
//! Writes produce the string assigned to `document.cookie`. Production hosts
//! (the apex or any of its subdomains) get a parent-domain, secure cookie so
//! every sibling site sees it; any other host (local development over plain
//! HTTP) gets a host-only, non-secure cookie.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use crate::mode::ThemeMode;

/// Cookie name shared by the bootstrap script and the runtime bridge.
pub const COOKIE_NAME: &str = "wjjw_theme";

/// One year in seconds.
pub const MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// Registrable parent domain shared by the marketing site and the docs subdomain.
pub const DEFAULT_APEX_DOMAIN: &str = "williamjwhite.me";

/// Error produced while decoding the cookie value.
///
/// Only visible to code that asks for it explicitly via [`lookup`]; the
/// [`read_header`] entry point folds every variant into `None`.
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    /// The entry could not be parsed or percent-decoded.
    #[error("failed to decode theme cookie: {0}")]
    Decode(#[from] cookie::ParseError),
    /// The decoded value is not a known [`ThemeMode`].
    #[error("unrecognized theme mode: {0:?}")]
    UnknownMode(String),
}

/// Where a written cookie is visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CookieScope {
    /// Shared across the apex and all of its subdomains; always `Secure`.
    Shared { domain: String },
    /// Visible to the current host only; sent over plain HTTP.
    HostOnly,
}

impl CookieScope {
    /// Pick the scope for the page currently served from `host`.
    ///
    /// `host` is a bare hostname (`window.location.hostname`, no port). A host
    /// that merely ends with the apex text, such as `evilwilliamjwhite.me`, is
    /// not treated as production.
    #[must_use]
    pub fn for_host(host: &str, apex: &str) -> Self {
        let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
        let apex = apex.trim().trim_matches('.').to_ascii_lowercase();
        if apex.is_empty() {
            return Self::HostOnly;
        }

        let is_production = host == apex
            || host
                .strip_suffix(apex.as_str())
                .is_some_and(|rest| rest.ends_with('.') && rest.len() > 1);
        if is_production {
            Self::Shared { domain: apex }
        } else {
            Self::HostOnly
        }
    }

    /// Parent domain attribute, when shared.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Shared { domain } => Some(domain),
            Self::HostOnly => None,
        }
    }

    #[must_use]
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Shared { .. })
    }
}

/// Read the theme preference from a cookie header.
///
/// Returns `None` when the entry is missing, cannot be decoded, or holds
/// anything other than `dark` / `light`.
#[must_use]
pub fn read_header(header: &str) -> Option<ThemeMode> {
    match lookup(header) {
        Ok(mode) => mode,
        Err(e) => {
            log::debug!("ignoring theme cookie: {e}");
            None
        }
    }
}

/// Locate and decode the theme entry, reporting why a present entry was rejected.
///
/// # Errors
///
/// Returns [`CookieError`] when the first entry named [`COOKIE_NAME`] cannot be
/// decoded or does not hold a valid mode. Later duplicates are not consulted.
pub fn lookup(header: &str) -> Result<Option<ThemeMode>, CookieError> {
    for entry in header.split(';').map(str::trim) {
        let Some((name, raw)) = entry.split_once('=') else {
            continue;
        };
        if name != COOKIE_NAME {
            continue;
        }
        return decode_value(raw).map(Some);
    }
    Ok(None)
}

/// Percent-decode and validate one raw cookie value.
///
/// Surrounding whitespace is ignored, matching user agents and the bootstrap
/// script.
///
/// # Errors
///
/// Returns [`CookieError::Decode`] when the value is not valid percent-encoded
/// UTF-8, and [`CookieError::UnknownMode`] for anything but `dark` / `light`.
pub fn decode_value(raw: &str) -> Result<ThemeMode, CookieError> {
    let parsed = Cookie::parse_encoded(format!("{COOKIE_NAME}={}", raw.trim()))?;
    parsed.value().parse()
}

/// Serialize `mode` as a `document.cookie` assignment for `scope`.
#[must_use]
pub fn encode(mode: ThemeMode, scope: &CookieScope) -> String {
    let mut builder = Cookie::build((COOKIE_NAME, mode.as_str()))
        .path("/")
        .max_age(Duration::seconds(MAX_AGE_SECS))
        .same_site(SameSite::Lax);
    if let CookieScope::Shared { domain } = scope {
        builder = builder.domain(domain.clone()).secure(true);
    }
    builder.build().encoded().to_string()
}
