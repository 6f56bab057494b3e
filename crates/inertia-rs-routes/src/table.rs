//! The route table: an immutable mapping from route name to URL pattern.
//!
//! The table is the client-side mirror of the server's named URL patterns.
//! It is built once (from pairs or from the JSON object the server emits),
//! validated eagerly, and then only ever read. Construct it explicitly and
//! pass a reference to whatever needs link resolution; there is no ambient
//! global table.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use inertia_rs_core::{InertiaError, InertiaResult};

use crate::pattern::RoutePattern;

/// An immutable mapping from namespaced route name (e.g. `accounts:login`)
/// to its parsed [`RoutePattern`].
///
/// Because the table never changes after construction, `&RouteTable` can be
/// shared freely across threads without locking.
///
/// # Examples
///
/// ```
/// use inertia_rs_routes::table::RouteTable;
///
/// let table = RouteTable::from_json_str(
///     r#"{"accounts:login": "/login", "management:user_detail": "/manage/user/<user_id>/"}"#,
/// )
/// .unwrap();
///
/// assert!(table.contains("accounts:login"));
/// assert_eq!(table.get("accounts:login").unwrap().template(), "/login");
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, RoutePattern>,
}

impl RouteTable {
    /// Builds a route table from `(name, template)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::ImproperlyConfigured`] if a route name occurs
    /// more than once or if any template fails to parse.
    pub fn from_pairs<I, N, T>(pairs: I) -> InertiaResult<Self>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let mut routes = HashMap::new();
        for (name, template) in pairs {
            let name = name.into();
            let pattern = RoutePattern::parse(template.as_ref())?;
            if routes.insert(name.clone(), pattern).is_some() {
                return Err(InertiaError::ImproperlyConfigured(format!(
                    "Duplicate route name '{name}' in route table"
                )));
            }
        }
        Ok(Self { routes })
    }

    /// Builds a route table from the JSON object emitted by the server:
    /// keys are namespaced route names, values are URL templates.
    ///
    /// The table must be kept bit-identical between server and client, so
    /// template values are never rewritten on load.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::SerializationError`] if the JSON is not an
    /// object of strings, or [`InertiaError::ImproperlyConfigured`] if a
    /// template fails to parse.
    pub fn from_json_str(json: &str) -> InertiaResult<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json).map_err(|e| {
            InertiaError::SerializationError(format!("Failed to parse route table JSON: {e}"))
        })?;
        Self::from_pairs(entries)
    }

    /// Builds a route table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> InertiaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Returns the pattern registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&RoutePattern> {
        self.routes.get(name)
    }

    /// Returns `true` if `name` is present in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Returns the number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns an iterator over the route names in the table.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}
