//! `web-sys` target for the theme bootstrap.

use themesync::bootstrap::{BootstrapError, BootstrapTarget};

/// The live document and its `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl BootstrapTarget for BrowserDocument {
    fn cookie_header(&self) -> Option<String> {
        crate::util::theme_cookie::cookie_header()
    }

    fn set_storage(&self, key: &str, value: &str) -> Result<(), BootstrapError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| BootstrapError::StorageUnavailable("localStorage disabled".into()))?;
            storage
                .set_item(key, value)
                .map_err(|e| BootstrapError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(BootstrapError::StorageUnavailable("not running in a browser".into()))
        }
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), BootstrapError> {
        #[cfg(feature = "hydrate")]
        {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .ok_or(BootstrapError::NoDocument)?;
            root.set_attribute(name, value).map_err(|_| BootstrapError::NoDocument)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
            Err(BootstrapError::NoDocument)
        }
    }
}
