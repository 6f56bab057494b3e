//! The initial page payload embedded by the server.
//!
//! On a full page load the server renders the page object into a JSON
//! element inside the document; the client parses it to learn which
//! component to mount and with which props. The shape follows the Inertia
//! page object: `component`, `props`, `url`, and an optional asset
//! `version`.

use serde::{Deserialize, Serialize};

use inertia_rs_core::{InertiaError, InertiaResult};

/// The server-embedded page object for an initial load.
///
/// # Examples
///
/// ```
/// use inertia_rs_pages::payload::Page;
///
/// let page = Page::from_json_str(
///     r#"{"component": "Login", "props": {"errors": {}}, "url": "/login", "version": "abc123"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(page.component, "Login");
/// assert_eq!(page.url, "/login");
/// assert_eq!(page.version.as_deref(), Some("abc123"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// The logical component name to mount (e.g. `"Login"`).
    pub component: String,
    /// Arbitrary props for the component, passed through verbatim.
    #[serde(default)]
    pub props: serde_json::Value,
    /// The URL the payload was rendered for.
    pub url: String,
    /// The current asset version, if the server tracks one.
    #[serde(default)]
    pub version: Option<String>,
}

impl Page {
    /// Parses a page payload from the JSON text of the page element.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::SerializationError`] if the JSON is malformed
    /// or missing required fields.
    pub fn from_json_str(json: &str) -> InertiaResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            InertiaError::SerializationError(format!("Failed to parse page payload: {e}"))
        })
    }
}
