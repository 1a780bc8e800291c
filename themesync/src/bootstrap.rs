//! Pre-hydration theme application.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bootstrap runs before the framework bundle loads, so it cannot use this
//! crate at runtime. [`script`] therefore generates the JavaScript artifact
//! from the same constants the Rust codec uses; [`apply`] is the Rust
//! rendition of that script, run by the client at hydration start and by tests.
//!
//! TRADE-OFFS
//! ==========
//! Storage writes are best effort. The root attribute write is the one that
//! prevents the flash of the wrong theme, so it never depends on storage.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::cookie::{self, COOKIE_NAME};
use crate::mode::ThemeMode;

/// Storage keys a docs framework may read its initial theme from, across versions.
pub const STORAGE_KEYS: [&str; 4] = ["theme", "docusaurus-theme", "docusaurus.colorMode", "docusaurus.theme"];

/// Root element attribute the stylesheet selects on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Path the server publishes [`script`] at.
pub const SCRIPT_PATH: &str = "/theme-sync.js";

/// Failure reported by a [`BootstrapTarget`].
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Storage is disabled, full, or threw on write.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    /// No document (or no root element) to write to.
    #[error("no document available")]
    NoDocument,
}

/// The document-side effects the bootstrap needs.
pub trait BootstrapTarget {
    /// Raw cookie header, or `None` when cookies cannot be read.
    fn cookie_header(&self) -> Option<String>;

    /// Write one storage entry.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::StorageUnavailable`] when the write fails.
    fn set_storage(&self, key: &str, value: &str) -> Result<(), BootstrapError>;

    /// Set an attribute on the root document element.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::NoDocument`] outside a document context.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), BootstrapError>;
}

/// Copy the cookie's mode into storage and onto the root element.
///
/// Returns the applied mode, or `None` when no valid preference is recorded,
/// in which case nothing is written and the framework's default logic wins.
pub fn apply<T: BootstrapTarget + ?Sized>(target: &T) -> Option<ThemeMode> {
    let mode = cookie::read_header(&target.cookie_header()?)?;

    for key in STORAGE_KEYS {
        if let Err(e) = target.set_storage(key, mode.as_str()) {
            log::debug!("bootstrap skipped storage key {key}: {e}");
        }
    }
    if let Err(e) = target.set_root_attribute(THEME_ATTRIBUTE, mode.as_str()) {
        log::debug!("bootstrap could not set {THEME_ATTRIBUTE}: {e}");
    }

    Some(mode)
}

const SCRIPT_TEMPLATE: &str = r#"(function () {
  var COOKIE_NAME = __COOKIE_NAME__;
  var STORAGE_KEYS = __STORAGE_KEYS__;
  var ATTRIBUTE = __ATTRIBUTE__;
  var MODES = __MODES__;

  function trim(text) {
    return text.replace(/^\s+|\s+$/g, "");
  }

  function readCookie(name) {
    try {
      var entries = document.cookie ? document.cookie.split(";") : [];
      for (var i = 0; i < entries.length; i++) {
        var entry = trim(entries[i]);
        var eq = entry.indexOf("=");
        if (eq < 0 || entry.slice(0, eq) !== name) continue;
        return decodeURIComponent(trim(entry.slice(eq + 1)));
      }
    } catch (e) {}
    return null;
  }

  var mode = readCookie(COOKIE_NAME);
  if (MODES.indexOf(mode) < 0) return;

  for (var k = 0; k < STORAGE_KEYS.length; k++) {
    try {
      localStorage.setItem(STORAGE_KEYS[k], mode);
    } catch (e) {}
  }

  try {
    document.documentElement.setAttribute(ATTRIBUTE, mode);
  } catch (e) {}
})();
"#;

/// Render the standalone bootstrap script served at [`SCRIPT_PATH`].
///
/// The script is synchronous, self-contained and safe to load before any
/// module system exists.
#[must_use]
pub fn script() -> String {
    let modes: Vec<&str> = ThemeMode::ALL.iter().map(|m| m.as_str()).collect();
    SCRIPT_TEMPLATE
        .replace("__COOKIE_NAME__", &js_literal(&COOKIE_NAME))
        .replace("__STORAGE_KEYS__", &js_literal(&STORAGE_KEYS))
        .replace("__ATTRIBUTE__", &js_literal(&THEME_ATTRIBUTE))
        .replace("__MODES__", &js_literal(&modes))
}

/// JSON is a subset of JavaScript literal syntax for strings and arrays.
fn js_literal<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_owned())
}
