//! Browser glue: navigation, blocking dialogs, clock, and local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize csr-only `web-sys` calls so pages and components
//! stay free of window plumbing. Native builds get inert stand-ins.

/// localStorage key for the anonymous whiteboard author id.
pub const ANON_ID_KEY: &str = "servicehub.anon_id";

/// Current page URL, used as the post-login return address.
#[must_use]
pub fn current_href() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Navigate the whole page to `url`.
pub fn redirect(url: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::warn!("redirect to {url} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("redirect to {url} skipped outside the browser");
    }
}

/// Show a blocking notification.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}

/// Ask a yes/no question; `false` if the dialog cannot be shown.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Wall-clock time in whole milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Stable per-browser id for signed-out whiteboard authors.
///
/// Generated once and kept in localStorage; a fresh id each call if storage
/// is unavailable.
#[must_use]
pub fn anonymous_id() -> String {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(existing) = storage
            .as_ref()
            .and_then(|s| s.get_item(ANON_ID_KEY).ok().flatten())
            .filter(|v| !v.is_empty())
        {
            return existing;
        }
        let id = new_anonymous_id();
        if let Some(storage) = storage {
            if let Err(e) = storage.set_item(ANON_ID_KEY, &id) {
                log::debug!("could not persist anonymous id: {e:?}");
            }
        }
        id
    }
    #[cfg(not(feature = "csr"))]
    {
        new_anonymous_id()
    }
}

fn new_anonymous_id() -> String {
    format!("anon-{}", uuid::Uuid::new_v4().simple())
}
