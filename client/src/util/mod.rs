//! Browser helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from components. Every helper is a
//! safe no-op outside the `hydrate` build so SSR stays deterministic.

pub mod bootstrap;
pub mod color_mode;
pub mod theme_cookie;
