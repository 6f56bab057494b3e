//! # inertia-rs
//!
//! An Inertia-style client layer for server-driven single-page apps in Rust.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `inertia-rs` to get the entire client layer, or
//! depend on individual crates for finer-grained control.

/// Core types, settings, and error types.
pub use inertia_rs_core as core;

/// Route table and reverse URL resolution.
pub use inertia_rs_routes as routes;

/// Page registry and page payload types.
pub use inertia_rs_pages as pages;

/// Page bootstrap and CSRF plumbing.
pub use inertia_rs_client as client;
