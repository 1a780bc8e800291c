//! Runtime reconciliation between framework theme state and the cookie.
//!
//! ARCHITECTURE
//! ============
//! The cookie is the authoritative store; the framework's reactive color mode
//! is a cache kept convergent on discrete lifecycle triggers:
//!
//! - mount: adopt the cookie once, so a sibling site or a previous session
//!   wins over the framework default;
//! - color mode change: write the new mode back to the cookie;
//! - focus / visibility restored: adopt the cookie again if it moved while
//!   this tab was in the background.
//!
//! TRADE-OFFS
//! ==========
//! There is no push channel between tabs or origins and no provenance on the
//! cookie value. Changes are detected by value comparison only, so the last
//! writer wins and other tabs catch up on their next focus.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::mode::ThemeMode;

/// The framework's reactive theme accessor/mutator pair.
pub trait ColorModeHost {
    /// Current mode, read without subscribing to changes.
    fn current(&self) -> ThemeMode;

    /// Ask the framework to switch modes.
    fn request(&self, mode: ThemeMode);
}

/// Cookie read/write as seen by the bridge. Failures are absorbed by implementors.
pub trait CookieAccess {
    fn read(&self) -> Option<ThemeMode>;
    fn write(&self, mode: ThemeMode);
}

/// Lifecycle event that caused a resync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    Focus,
    Visible,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mount => "mount",
            Self::Focus => "focus",
            Self::Visible => "visibilitychange",
        })
    }
}

/// Reconciler for one mounted page.
///
/// Clones share the mounted flag, so handlers installed from separate
/// closures still honour the mount-once rule.
#[derive(Clone)]
pub struct ThemeBridge<H, C> {
    host: H,
    cookies: C,
    mounted: Arc<AtomicBool>,
}

impl<H: ColorModeHost, C: CookieAccess> ThemeBridge<H, C> {
    pub fn new(host: H, cookies: C) -> Self {
        Self { host, cookies, mounted: Arc::new(AtomicBool::new(false)) }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Relaxed)
    }

    /// Adopt the cookie's mode on first mount.
    ///
    /// Returns `true` when a mode change was requested. Only the first call
    /// does anything; later calls return `false`.
    pub fn mount(&self) -> bool {
        if self.mounted.swap(true, Ordering::Relaxed) {
            return false;
        }
        self.adopt_cookie(Trigger::Mount)
    }

    /// Propagate a framework mode change to the shared cookie.
    pub fn color_mode_changed(&self, mode: ThemeMode) {
        log::debug!("theme bridge: writing {mode} to cookie");
        self.cookies.write(mode);
    }

    /// Window regained focus.
    pub fn focus(&self) -> bool {
        self.adopt_cookie(Trigger::Focus)
    }

    /// Document visibility changed; resync only when it is visible again.
    pub fn visibility_changed(&self, hidden: bool) -> bool {
        if hidden {
            return false;
        }
        self.adopt_cookie(Trigger::Visible)
    }

    fn adopt_cookie(&self, trigger: Trigger) -> bool {
        let Some(cookie_mode) = self.cookies.read() else {
            return false;
        };
        if cookie_mode == self.host.current() {
            return false;
        }
        log::debug!("theme bridge: adopting {cookie_mode} from cookie on {trigger}");
        self.host.request(cookie_mode);
        true
    }
}
