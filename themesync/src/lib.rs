//! Cross-subdomain theme preference sync.
//!
//! This crate owns the wire representation of the shared `wjjw_theme` cookie and
//! the reconciliation rules used by both the Leptos `client` and the `server`.
//! Nothing here touches a browser directly: the client supplies `web-sys`
//! adapters for the [`bootstrap::BootstrapTarget`], [`bridge::ColorModeHost`] and
//! [`bridge::CookieAccess`] seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cookie is the only durable source of truth. The bootstrap script copies
//! it into the document before the framework hydrates; the bridge keeps the
//! framework's reactive state and the cookie convergent afterwards.

pub mod bootstrap;
pub mod bridge;
pub mod cookie;
pub mod mode;

pub use bootstrap::BootstrapError;
pub use cookie::{CookieError, CookieScope};
pub use mode::ThemeMode;
