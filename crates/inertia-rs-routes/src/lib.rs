//! # inertia-rs-routes
//!
//! The route resolver for the inertia-rs client layer: an immutable,
//! explicitly injected route table plus reverse URL resolution, mirroring
//! the `reverse()` half of Django's URL machinery as the server exports it
//! to the browser.
//!
//! - [`pattern`]: URL templates with `<name>` placeholder parsing
//! - [`table`]: the name-to-pattern [`RouteTable`](table::RouteTable)
//! - [`reverse`]: `reverse` / `reverse_named` / `reverse_positional`
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use inertia_rs_routes::reverse::{reverse, reverse_named, reverse_positional};
//! use inertia_rs_routes::table::RouteTable;
//!
//! let table = RouteTable::from_json_str(
//!     r#"{
//!         "accounts:login": "/login",
//!         "management:user_detail": "/manage/user/<user_id>/"
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(reverse(&table, "accounts:login").unwrap(), "/login");
//!
//! let mut kwargs = HashMap::new();
//! kwargs.insert("user_id", 42);
//! assert_eq!(
//!     reverse_named(&table, "management:user_detail", &kwargs).unwrap(),
//!     "/manage/user/42/"
//! );
//! assert_eq!(
//!     reverse_positional(&table, "management:user_detail", &[42]).unwrap(),
//!     "/manage/user/42/"
//! );
//! ```

pub mod pattern;
pub mod reverse;
pub mod table;

// Re-export the most commonly used types at the crate root.
pub use pattern::RoutePattern;
pub use reverse::{reverse, reverse_named, reverse_positional};
pub use table::RouteTable;
