//! # inertia-rs-core
//!
//! Core types, settings, and error types for the inertia-rs client layer.
//! This crate has zero framework dependencies and provides the foundation
//! for all other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Client-layer settings and file/env loading
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{InertiaError, InertiaResult};
pub use settings::Settings;
