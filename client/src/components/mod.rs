//! Reusable UI components.

pub mod theme_cookie_bridge;
pub mod theme_toggle;
