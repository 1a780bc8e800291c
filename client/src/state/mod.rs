//! Reactive application state shared through Leptos context.

pub mod color_mode;
