//! Settings for the inertia-rs client layer.
//!
//! This module provides the [`Settings`] struct holding the client-side
//! configuration: where the initial page payload lives in the rendered
//! document, which form field and header carry the CSRF token, and where the
//! route table and page registry are loaded from.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `INERTIA_DEBUG` | `debug` |
//! | `INERTIA_LOG_LEVEL` | `log_level` |
//! | `INERTIA_PAGE_ELEMENT_ID` | `page_element_id` |
//! | `INERTIA_CSRF_FIELD_NAME` | `csrf_field_name` |
//! | `INERTIA_CSRF_HEADER_NAME` | `csrf_header_name` |
//! | `INERTIA_ROUTES_PATH` | `routes_path` |
//! | `INERTIA_PAGES_PATH` | `pages_path` |

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InertiaError, InertiaResult};

/// The complete set of client-layer settings.
///
/// Every field has a default matching the conventions of a Django-rendered
/// host document, so `Settings::default()` is a working configuration.
///
/// # Examples
///
/// ```
/// use inertia_rs_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.page_element_id, "page");
/// assert_eq!(settings.csrf_field_name, "csrfmiddlewaretoken");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level filter (e.g. "debug", "info", "warn", "error").
    pub log_level: String,
    /// The id of the element carrying the JSON page payload.
    pub page_element_id: String,
    /// The name of the hidden input carrying the CSRF token.
    pub csrf_field_name: String,
    /// The request header under which the CSRF token is sent back.
    pub csrf_header_name: String,
    /// Path to the JSON route table emitted by the server.
    pub routes_path: PathBuf,
    /// Path to the JSON page registry.
    pub pages_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            page_element_id: "page".to_string(),
            csrf_field_name: "csrfmiddlewaretoken".to_string(),
            csrf_header_name: "X-XSRF-TOKEN".to_string(),
            routes_path: PathBuf::from("routes.json"),
            pages_path: PathBuf::from("pages.json"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML string.
    ///
    /// Fields not present in the TOML keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    pub fn from_toml_str(toml_str: &str) -> InertiaResult<Self> {
        toml::from_str(toml_str)
            .map_err(|e| InertiaError::ConfigurationError(format!("Failed to parse TOML: {e}")))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> InertiaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            InertiaError::ConfigurationError(format!(
                "Failed to read TOML file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads settings from a JSON string.
    ///
    /// Fields not present in the JSON keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json_str(json_str: &str) -> InertiaResult<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| InertiaError::ConfigurationError(format!("Failed to parse JSON: {e}")))
    }

    /// Loads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> InertiaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            InertiaError::ConfigurationError(format!(
                "Failed to read JSON file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Loads settings from just environment variables (starting from defaults).
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env_overrides();
        settings
    }

    /// Applies `INERTIA_*` environment variable overrides to this settings
    /// struct. See the module documentation for the mapping.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("INERTIA_DEBUG") {
            self.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
        }

        if let Ok(val) = std::env::var("INERTIA_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("INERTIA_PAGE_ELEMENT_ID") {
            self.page_element_id = val;
        }

        if let Ok(val) = std::env::var("INERTIA_CSRF_FIELD_NAME") {
            self.csrf_field_name = val;
        }

        if let Ok(val) = std::env::var("INERTIA_CSRF_HEADER_NAME") {
            self.csrf_header_name = val;
        }

        if let Ok(val) = std::env::var("INERTIA_ROUTES_PATH") {
            self.routes_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("INERTIA_PAGES_PATH") {
            self.pages_path = PathBuf::from(val);
        }
    }
}
