//! Runtime configuration read from the host page.
//!
//! The API base URL defaults to same-origin. A host page served from a
//! different origin than the API can set
//! `<meta name="activity-board:api-base" content="https://...">`.
//!
//! TRADE-OFFS
//! ==========
//! Reading the document is browser-only; other builds always get the
//! defaults so tests stay deterministic.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta>` name holding the API base URL override.
pub const API_BASE_META: &str = "activity-board:api-base";

/// Document title.
pub const APP_TITLE: &str = "Extracurricular Activities";

/// Stylesheet served alongside the API.
pub const STYLESHEET_HREF: &str = "/static/styles.css";

/// Client configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for every API path, without a trailing slash. Empty means same-origin.
    pub api_base: String,
}

impl AppConfig {
    pub fn with_api_base(base: &str) -> Self {
        Self { api_base: normalize_api_base(base) }
    }

    /// Resolve configuration from the current document, falling back to defaults.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            read_meta_content(API_BASE_META)
                .map(|base| Self::with_api_base(&base))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly.
pub fn normalize_api_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_owned()
}

#[cfg(feature = "csr")]
fn read_meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    meta.get_attribute("content")
}
