//! Client configuration: where the REST API, auth provider, and shape feed live.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults assume the app is served from the same origin as the API and the
//! auth provider. A deployment can override any value with
//! `<meta name="servicehub:KEY" content="...">` tags in the host page; the
//! resulting config is provided to every component through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Logical path of the shared shape collection.
pub const DEFAULT_SHAPES_PATH: &str = "whiteboard/shapes";

/// Prefix for `<meta>` override tags.
pub const META_PREFIX: &str = "servicehub:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin (or path prefix) for `/api/...` calls. Empty means same origin.
    pub api_base: String,
    /// Origin for `/.auth/...` endpoints. Empty means same origin.
    pub auth_base: String,
    /// Logical path of the whiteboard shape collection.
    pub shapes_path: String,
    /// WebSocket URL of the shape feed. `None` keeps the board in-process.
    pub shape_feed_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            auth_base: String::new(),
            shapes_path: DEFAULT_SHAPES_PATH.to_owned(),
            shape_feed_url: None,
        }
    }
}

impl ClientConfig {
    /// Apply overrides from `lookup`, keyed by `api-base`, `auth-base`,
    /// `shapes-path`, and `shape-feed`. Blank values are ignored.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        if let Some(v) = get("api-base") {
            self.api_base = v;
        }
        if let Some(v) = get("auth-base") {
            self.auth_base = v;
        }
        if let Some(v) = get("shapes-path") {
            self.shapes_path = v;
        }
        if let Some(v) = get("shape-feed") {
            self.shape_feed_url = Some(v);
        }
        self
    }

    /// Build the config from defaults plus `<meta>` overrides in the document.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            Self::default().with_overrides(meta_content)
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Absolute or same-origin URL for an API path.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }

    /// Absolute or same-origin URL for an auth-provider path.
    #[must_use]
    pub fn auth_url(&self, path: &str) -> String {
        join_url(&self.auth_base, path)
    }

    /// Whether auth calls leave the page's origin. The session cookie then
    /// has to be sent explicitly.
    #[must_use]
    pub fn auth_is_cross_origin(&self) -> bool {
        let base = self.auth_base.trim().to_ascii_lowercase();
        base.starts_with("http://") || base.starts_with("https://") || base.starts_with("//")
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(feature = "csr")]
fn meta_content(key: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
    let element = document.query_selector(&selector).ok().flatten()?;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}
