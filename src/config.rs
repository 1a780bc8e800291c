//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SCRIPT_MAX_AGE_SECS: u64 = 3600;

/// Error raised while loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub script_max_age_secs: u64,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `static/` next to this crate's manifest
    /// - `THEME_SCRIPT_MAX_AGE_SECS`: default 3600
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_static_dir, PathBuf::from);
        let script_max_age_secs = parse_or(&lookup, "THEME_SCRIPT_MAX_AGE_SECS", DEFAULT_SCRIPT_MAX_AGE_SECS)?;

        Ok(Self { port, static_dir, script_max_age_secs })
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
