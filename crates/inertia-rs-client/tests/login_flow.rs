//! Login-flow tests at the link/bootstrap layer.
//!
//! The server half of the flow (session issuance, credential checks, the
//! actual 403 on a bad token) stays server-side; these tests pin down the
//! client's half of the contract:
//!
//! 1. An unauthenticated document bootstraps to the Login page
//! 2. The login form targets the reversed `accounts:login` route
//! 3. The CSRF token travels from the hidden field to the request header
//! 4. A document without a token fails loudly instead of submitting bare
//! 5. After login, the dashboard document bootstraps with its props
//! 6. Logout is an ordinary reversed link

use std::collections::HashMap;

use inertia_rs_client::app::App;
use inertia_rs_client::csrf::CSRF_HEADER;
use inertia_rs_core::{InertiaError, Settings};
use inertia_rs_pages::PageRegistry;
use inertia_rs_routes::table::RouteTable;

const ROUTES_JSON: &str = r#"{
    "core:index": "/",
    "accounts:login": "/login",
    "accounts:logout": "/logout",
    "accounts:register": "/register",
    "accounts:reset_password": "/password/reset",
    "management:users": "/manage/users",
    "management:user_detail": "/manage/user/<user_id>/"
}"#;

const LOGIN_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head><title>easystart</title></head>
<body>
<form method="post" action="/login">
<input type="hidden" name="csrfmiddlewaretoken" value="fYx2...valid-token">
<input type="email" name="email" value="">
<input type="password" name="password" value="">
</form>
<script id="page" type="application/json">
{"component": "Login", "props": {"errors": {}}, "url": "/login", "version": "1"}
</script>
<div id="app"></div>
</body>
</html>"#;

const DASHBOARD_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head><title>easystart</title></head>
<body>
<form><input type="hidden" name="csrfmiddlewaretoken" value="fYx2...fresh-token"></form>
<script id="page" type="application/json">
{"component": "Index", "props": {"user": {"email": "client@test.com", "is_manager": false}}, "url": "/", "version": "1"}
</script>
<div id="app"></div>
</body>
</html>"#;

fn client_app() -> App {
    let routes = RouteTable::from_json_str(ROUTES_JSON).unwrap();
    let pages = PageRegistry::from_pairs([
        ("Index", "Dashboard/Index.vue"),
        ("Login", "Auth/Login.vue"),
        ("Register", "Auth/Register.vue"),
        ("PasswordReset", "Auth/PasswordReset.vue"),
        ("Users", "Management/Users/List.vue"),
        ("UserDetail", "Management/Users/Detail.vue"),
    ])
    .unwrap();
    App::new(Settings::default(), routes, pages)
}

#[test]
fn test_unauthenticated_boot_lands_on_login() {
    let app = client_app();
    let boot = app.boot(LOGIN_DOCUMENT).unwrap();

    assert_eq!(boot.page.component, "Login");
    assert_eq!(boot.page.url, "/login");
    assert_eq!(boot.view, "Auth/Login.vue");
    assert_eq!(boot.page.props["errors"], serde_json::json!({}));
}

#[test]
fn test_login_form_targets_reversed_route() {
    let app = client_app();
    assert_eq!(app.route("accounts:login").unwrap(), "/login");
    // The rendered form action and the reversed route must agree.
    assert!(LOGIN_DOCUMENT.contains(r#"action="/login""#));
}

#[test]
fn test_csrf_token_travels_to_header() {
    let app = client_app();
    let boot = app.boot(LOGIN_DOCUMENT).unwrap();

    let (header, value) = boot.csrf_token.header_pair(&app.settings().csrf_header_name);
    assert_eq!(header, CSRF_HEADER);
    assert_eq!(value, "fYx2...valid-token");
}

#[test]
fn test_document_without_token_fails_loudly() {
    let app = client_app();
    let stripped = LOGIN_DOCUMENT.replace(
        r#"<input type="hidden" name="csrfmiddlewaretoken" value="fYx2...valid-token">"#,
        "",
    );

    let err = app.boot(&stripped).unwrap_err();
    assert!(matches!(err, InertiaError::MissingElement(_)));
    // Submitting without a token is the server's 403 case; the client never
    // gets far enough to build the request.
}

#[test]
fn test_authenticated_boot_lands_on_dashboard() {
    let app = client_app();
    let boot = app.boot(DASHBOARD_DOCUMENT).unwrap();

    assert_eq!(boot.page.component, "Index");
    assert_eq!(boot.view, "Dashboard/Index.vue");
    assert_eq!(boot.page.props["user"]["email"], "client@test.com");
    assert_eq!(boot.page.props["user"]["is_manager"], false);
}

#[test]
fn test_logout_is_a_reversed_link() {
    let app = client_app();
    assert_eq!(app.route("accounts:logout").unwrap(), "/logout");
}

#[test]
fn test_manager_links_resolve_from_dashboard() {
    let app = client_app();
    let _boot = app.boot(DASHBOARD_DOCUMENT).unwrap();

    assert_eq!(app.route("management:users").unwrap(), "/manage/users");

    let mut kwargs = HashMap::new();
    kwargs.insert("user_id", 7);
    assert_eq!(
        app.route_named("management:user_detail", &kwargs).unwrap(),
        "/manage/user/7/"
    );
}

#[test]
fn test_broken_link_is_a_defect_not_a_condition() {
    let app = client_app();
    let err = app.route("accounts:delete_account").unwrap_err();
    assert!(err.is_link_defect());
    assert!(matches!(err, InertiaError::UnknownRoute(_)));
}
