//! # inertia-rs-client
//!
//! The page bootstrap for the inertia-rs client layer: scraping the
//! server-rendered document, CSRF token plumbing, and app assembly.
//!
//! ## Modules
//!
//! - [`document`] - Element/input reads over rendered HTML
//! - [`csrf`] - [`CsrfToken`](csrf::CsrfToken) extraction and header plumbing
//! - [`app`] - [`App`](app::App) assembly and the initial-load [`Bootstrap`](app::Bootstrap)

pub mod app;
pub mod csrf;
pub mod document;

// Re-export the most commonly used types at the crate root.
pub use app::{App, Bootstrap};
pub use csrf::CsrfToken;
