//! The page registry: logical component names mapped to view modules.
//!
//! The server names pages by logical component (`"Login"`, `"UserDetail"`);
//! the client owns the mapping to concrete view modules
//! (`"Auth/Login.vue"`). Like the route table, the registry is built once,
//! validated eagerly, and injected where needed.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use inertia_rs_core::{InertiaError, InertiaResult};

/// An immutable mapping from logical page component name to view module
/// path.
///
/// # Examples
///
/// ```
/// use inertia_rs_pages::registry::PageRegistry;
///
/// let registry = PageRegistry::from_pairs([
///     ("Login", "Auth/Login.vue"),
///     ("Index", "Dashboard/Index.vue"),
/// ])
/// .unwrap();
///
/// assert_eq!(registry.get("Login").unwrap(), "Auth/Login.vue");
/// assert!(registry.get("Missing").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PageRegistry {
    pages: HashMap<String, String>,
}

impl PageRegistry {
    /// Builds a registry from `(component, module)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::ImproperlyConfigured`] if a component name is
    /// registered more than once.
    pub fn from_pairs<I, N, M>(pairs: I) -> InertiaResult<Self>
    where
        I: IntoIterator<Item = (N, M)>,
        N: Into<String>,
        M: Into<String>,
    {
        let mut pages = HashMap::new();
        for (name, module) in pairs {
            let name = name.into();
            if pages.insert(name.clone(), module.into()).is_some() {
                return Err(InertiaError::ImproperlyConfigured(format!(
                    "Duplicate page component '{name}' in page registry"
                )));
            }
        }
        Ok(Self { pages })
    }

    /// Builds a registry from a JSON object of component names to module
    /// paths, the same shape as the route table export.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::SerializationError`] if the JSON is not an
    /// object of strings.
    pub fn from_json_str(json: &str) -> InertiaResult<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json).map_err(|e| {
            InertiaError::SerializationError(format!("Failed to parse page registry JSON: {e}"))
        })?;
        Self::from_pairs(entries)
    }

    /// Builds a registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> InertiaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Returns the view module registered for `component`.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::UnknownPage`] if the component is not
    /// registered.
    pub fn get(&self, component: &str) -> InertiaResult<&str> {
        self.pages
            .get(component)
            .map(String::as_str)
            .ok_or_else(|| InertiaError::UnknownPage(component.to_string()))
    }

    /// Returns `true` if `component` is registered.
    pub fn contains(&self, component: &str) -> bool {
        self.pages.contains_key(component)
    }

    /// Returns the number of registered pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the registry has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns an iterator over the registered component names.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> PageRegistry {
        PageRegistry::from_pairs([
            ("Index", "Dashboard/Index.vue"),
            ("Login", "Auth/Login.vue"),
            ("Register", "Auth/Register.vue"),
            ("404Error", "Errors/404.vue"),
            ("UserDetail", "Management/Users/Detail.vue"),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_registered_component() {
        let registry = sample_registry();
        assert_eq!(registry.get("Login").unwrap(), "Auth/Login.vue");
        assert_eq!(registry.get("404Error").unwrap(), "Errors/404.vue");
    }

    #[test]
    fn test_get_unknown_component() {
        let registry = sample_registry();
        let err = registry.get("Settings").unwrap_err();
        assert!(matches!(err, InertiaError::UnknownPage(name) if name == "Settings"));
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let result = PageRegistry::from_pairs([
            ("Login", "Auth/Login.vue"),
            ("Login", "Auth/SignIn.vue"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_str() {
        let registry = PageRegistry::from_json_str(
            r#"{"Login": "Auth/Login.vue", "Users": "Management/Users/List.vue"}"#,
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Users"));
    }

    #[test]
    fn test_from_json_str_malformed() {
        assert!(PageRegistry::from_json_str("[]").is_err());
        assert!(PageRegistry::from_json_str("{broken").is_err());
    }

    #[test]
    fn test_from_json_file_missing() {
        assert!(PageRegistry::from_json_file("/nonexistent/pages.json").is_err());
    }

    #[test]
    fn test_components_iterator() {
        let registry = sample_registry();
        assert_eq!(registry.components().count(), registry.len());
        assert!(registry.components().any(|c| c == "UserDetail"));
    }
}
