//! The binary light/dark display preference.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cookie::CookieError;

/// Theme mode persisted in the shared cookie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    /// Every valid mode, in wire order.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    /// Wire text for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = CookieError;

    /// Exact, case-sensitive match on `dark` / `light`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(CookieError::UnknownMode(other.to_owned())),
        }
    }
}
