//! # easystart demo
//!
//! A working client-layer demo wiring the inertia-rs crates together:
//!
//! - **Settings**: loaded from TOML when present, programmatic defaults
//!   otherwise
//! - **Routes**: the real route table the server exports, loaded from JSON
//! - **Pages**: the component-to-view registry
//! - **Bootstrap**: booting from a rendered login document
//!
//! ## Running
//!
//! ```bash
//! cargo run --package easystart-demo
//! ```

mod pages;

use std::collections::HashMap;

use inertia_rs_client::App;
use inertia_rs_core::logging::setup_logging;
use inertia_rs_core::Settings;
use inertia_rs_routes::RouteTable;

/// The route table as the server emits it.
const ROUTES_JSON: &str = include_str!("../routes.json");

/// A rendered login document, as served to an unauthenticated visitor.
const LOGIN_DOCUMENT: &str = include_str!("../login.html");

fn main() -> anyhow::Result<()> {
    // Load settings - try TOML first, fall back to programmatic defaults
    let settings = if std::path::Path::new("easystart.toml").exists() {
        Settings::from_toml_file("easystart.toml")?
    } else {
        Settings::default()
    };
    setup_logging(&settings);
    tracing::info!(
        "easystart client configured: debug={}, routes={}",
        settings.debug,
        settings.routes_path.display()
    );

    let routes = RouteTable::from_json_str(ROUTES_JSON)?;
    tracing::info!("Loaded {} routes", routes.len());

    let registry = pages::page_registry()?;
    tracing::info!("Registered {} pages", registry.len());

    let app = App::new(settings, routes, registry);

    demonstrate_links(&app);
    demonstrate_bootstrap(&app)?;

    tracing::info!("easystart demo complete!");
    Ok(())
}

/// Demonstrates link resolution, including the fail-safe policy for broken
/// links.
fn demonstrate_links(app: &App) {
    tracing::info!("--- Link Resolution ---");

    for name in ["accounts:login", "accounts:register", "core:settings"] {
        match app.route(name) {
            Ok(url) => tracing::info!("  {} -> {}", name, url),
            Err(e) => tracing::warn!("  {} -> {}", name, e),
        }
    }

    let mut kwargs = HashMap::new();
    kwargs.insert("user_id", 42);
    match app.route_named("management:user_detail", &kwargs) {
        Ok(url) => tracing::info!("  management:user_detail {{user_id: 42}} -> {}", url),
        Err(e) => tracing::warn!("  management:user_detail -> {}", e),
    }

    match app.route_positional("accounts:reset_password_from_key", &["3f", "x9q"]) {
        Ok(url) => tracing::info!("  accounts:reset_password_from_key [3f, x9q] -> {}", url),
        Err(e) => tracing::warn!("  accounts:reset_password_from_key -> {}", e),
    }

    // A broken link is a defect: log it loudly and render a fallback.
    let href = app.route("accounts:delete_account").unwrap_or_else(|e| {
        debug_assert!(e.is_link_defect());
        tracing::warn!("broken link configuration: {}", e);
        "#".to_string()
    });
    tracing::info!("  accounts:delete_account fallback -> {}", href);
}

/// Demonstrates the initial-load bootstrap over a rendered document.
fn demonstrate_bootstrap(app: &App) -> anyhow::Result<()> {
    tracing::info!("--- Bootstrap ---");

    let boot = app.boot(LOGIN_DOCUMENT)?;
    tracing::info!(
        "  component={} view={} url={}",
        boot.page.component,
        boot.view,
        boot.page.url
    );

    let (header, value) = boot
        .csrf_token
        .header_pair(&app.settings().csrf_header_name);
    tracing::info!("  csrf header: {}: {}...", header, &value[..value.len().min(8)]);

    Ok(())
}
