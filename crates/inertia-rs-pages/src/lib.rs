//! # inertia-rs-pages
//!
//! Page registry and page payload types for the inertia-rs client layer.
//!
//! ## Modules
//!
//! - [`registry`] - The logical-name to view-module [`PageRegistry`](registry::PageRegistry)
//! - [`payload`] - The server-embedded [`Page`](payload::Page) object

pub mod payload;
pub mod registry;

// Re-export the most commonly used types at the crate root.
pub use payload::Page;
pub use registry::PageRegistry;
