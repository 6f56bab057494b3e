//! App assembly: the client bootstrap over a server-rendered document.
//!
//! [`App`] owns the immutable pieces the page-rendering code needs (the
//! settings, the route table, and the page registry), all passed in
//! explicitly at construction. [`App::boot`] performs the initial-load
//! sequence: pluck the CSRF token, parse the page payload, and resolve the
//! component's view module.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use inertia_rs_core::logging::boot_span;
use inertia_rs_core::{InertiaResult, Settings};
use inertia_rs_pages::{Page, PageRegistry};
use inertia_rs_routes::{reverse, reverse_named, reverse_positional, RouteTable};

use crate::csrf::CsrfToken;
use crate::document;

/// Everything the caller needs to mount the initial page.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    /// The parsed page payload.
    pub page: Page,
    /// The view module resolved for the payload's component.
    pub view: String,
    /// The CSRF token for subsequent state-changing requests.
    pub csrf_token: CsrfToken,
}

/// The assembled client application.
///
/// # Examples
///
/// ```
/// use inertia_rs_client::app::App;
/// use inertia_rs_core::Settings;
/// use inertia_rs_pages::PageRegistry;
/// use inertia_rs_routes::RouteTable;
///
/// let routes = RouteTable::from_json_str(r#"{"accounts:login": "/login"}"#).unwrap();
/// let pages = PageRegistry::from_pairs([("Login", "Auth/Login.vue")]).unwrap();
/// let app = App::new(Settings::default(), routes, pages);
///
/// assert_eq!(app.route("accounts:login").unwrap(), "/login");
/// ```
#[derive(Debug, Clone)]
pub struct App {
    settings: Settings,
    routes: RouteTable,
    pages: PageRegistry,
}

impl App {
    /// Assembles an app from its explicitly constructed parts.
    pub const fn new(settings: Settings, routes: RouteTable, pages: PageRegistry) -> Self {
        Self {
            settings,
            routes,
            pages,
        }
    }

    /// Returns the settings this app was assembled with.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the injected route table.
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Returns the injected page registry.
    pub const fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    /// Performs the initial-load bootstrap over a rendered document.
    ///
    /// Reads the CSRF token from the configured hidden field, parses the
    /// page payload from the configured element, and resolves the
    /// component's view module from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::MissingElement`](inertia_rs_core::InertiaError::MissingElement)
    /// if the token input or payload element is absent,
    /// [`InertiaError::SerializationError`](inertia_rs_core::InertiaError::SerializationError)
    /// if the payload is malformed, or
    /// [`InertiaError::UnknownPage`](inertia_rs_core::InertiaError::UnknownPage)
    /// if the payload names an unregistered component.
    pub fn boot(&self, rendered: &str) -> InertiaResult<Bootstrap> {
        let csrf_token = CsrfToken::from_document(rendered, &self.settings.csrf_field_name)?;

        let raw = document::element_text(rendered, &self.settings.page_element_id)?;
        let page = Page::from_json_str(&raw)?;

        let span = boot_span(&page.component);
        let _guard = span.enter();

        let view = self.pages.get(&page.component)?.to_string();
        tracing::info!(url = %page.url, view = %view, "mounted initial page");

        Ok(Bootstrap {
            page,
            view,
            csrf_token,
        })
    }

    /// Resolves a no-argument route. See
    /// [`reverse`](inertia_rs_routes::reverse::reverse).
    pub fn route(&self, name: &str) -> InertiaResult<String> {
        reverse(&self.routes, name)
    }

    /// Resolves a route with keyed arguments. See
    /// [`reverse_named`](inertia_rs_routes::reverse::reverse_named).
    pub fn route_named<V, S>(
        &self,
        name: &str,
        kwargs: &HashMap<&str, V, S>,
    ) -> InertiaResult<String>
    where
        V: fmt::Display,
        S: BuildHasher,
    {
        reverse_named(&self.routes, name, kwargs)
    }

    /// Resolves a route with positional arguments. See
    /// [`reverse_positional`](inertia_rs_routes::reverse::reverse_positional).
    pub fn route_positional<V>(&self, name: &str, args: &[V]) -> InertiaResult<String>
    where
        V: fmt::Display,
    {
        reverse_positional(&self.routes, name, args)
    }
}
