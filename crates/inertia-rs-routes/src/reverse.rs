//! Reverse URL resolution.
//!
//! This module provides the reversal operations for generating URLs from
//! named routes, mirroring Django's `django.urls.reverse()` as exposed to
//! the browser by `django-js-reverse`. The polymorphic argument shape of
//! `reverseUrl(name, mapping | list | ...values)` is replaced by three
//! explicitly named operations:
//!
//! - [`reverse`] for routes that take no arguments,
//! - [`reverse_named`] for keyed argument mappings,
//! - [`reverse_positional`] for ordered argument lists.
//!
//! All three are pure functions over an injected [`RouteTable`]: identical
//! inputs always produce identical output strings, and every failure is
//! returned synchronously as a distinguishable [`InertiaError`] variant.
//! Substituted values are inserted verbatim; they are not URL-encoded, so
//! callers are responsible for supplying already-safe path segments.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use inertia_rs_core::{InertiaError, InertiaResult};

use crate::pattern::RoutePattern;
use crate::table::RouteTable;

/// Generates the URL for a route that takes no arguments.
///
/// # Examples
///
/// ```
/// use inertia_rs_routes::reverse::reverse;
/// use inertia_rs_routes::table::RouteTable;
///
/// let table = RouteTable::from_json_str(r#"{"accounts:login": "/login"}"#).unwrap();
/// assert_eq!(reverse(&table, "accounts:login").unwrap(), "/login");
/// ```
///
/// # Errors
///
/// Returns [`InertiaError::UnknownRoute`] if `name` is not in the table, or
/// [`InertiaError::MissingArgument`] if the pattern has placeholders: a
/// reversal must never hand back literal `<token>` text.
pub fn reverse(table: &RouteTable, name: &str) -> InertiaResult<String> {
    let pattern = lookup(table, name)?;

    if let Some(first) = pattern.placeholders().first() {
        return Err(InertiaError::MissingArgument {
            route: name.to_string(),
            name: first.clone(),
        });
    }

    Ok(pattern.template().to_string())
}

/// Generates the URL for a route, substituting placeholders from a keyed
/// argument mapping.
///
/// Every placeholder in the pattern must have an entry in `kwargs`; keys
/// beyond the known placeholders are ignored. Values are string-coerced via
/// [`fmt::Display`]. All values are gathered before any substitution, so a
/// missing argument fails without partial output.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use inertia_rs_routes::reverse::reverse_named;
/// use inertia_rs_routes::table::RouteTable;
///
/// let table = RouteTable::from_json_str(
///     r#"{"management:user_detail": "/manage/user/<user_id>/"}"#,
/// )
/// .unwrap();
///
/// let mut kwargs = HashMap::new();
/// kwargs.insert("user_id", 42);
/// let url = reverse_named(&table, "management:user_detail", &kwargs).unwrap();
/// assert_eq!(url, "/manage/user/42/");
/// ```
///
/// # Errors
///
/// Returns [`InertiaError::UnknownRoute`] if `name` is not in the table,
/// [`InertiaError::UnexpectedArguments`] if the pattern has no placeholders
/// (even for an empty mapping), or [`InertiaError::MissingArgument`] naming
/// the first placeholder absent from `kwargs`.
pub fn reverse_named<V, S>(
    table: &RouteTable,
    name: &str,
    kwargs: &HashMap<&str, V, S>,
) -> InertiaResult<String>
where
    V: fmt::Display,
    S: BuildHasher,
{
    let pattern = lookup(table, name)?;

    if pattern.is_static() {
        return Err(InertiaError::UnexpectedArguments {
            route: name.to_string(),
        });
    }

    let mut values = Vec::with_capacity(pattern.placeholder_count());
    for placeholder in pattern.placeholders() {
        let value = kwargs.get(placeholder.as_str()).ok_or_else(|| {
            InertiaError::MissingArgument {
                route: name.to_string(),
                name: placeholder.clone(),
            }
        })?;
        values.push(value.to_string());
    }

    Ok(pattern.render(&values))
}

/// Generates the URL for a route, substituting placeholders from an ordered
/// argument list.
///
/// Values are matched to placeholders in left-to-right pattern order and
/// string-coerced via [`fmt::Display`]. The list length must exactly equal
/// the placeholder count.
///
/// # Examples
///
/// ```
/// use inertia_rs_routes::reverse::reverse_positional;
/// use inertia_rs_routes::table::RouteTable;
///
/// let table = RouteTable::from_json_str(
///     r#"{"accounts:reset_password_from_key": "/password/reset/key/<uidb36>-<key>/"}"#,
/// )
/// .unwrap();
///
/// let url = reverse_positional(&table, "accounts:reset_password_from_key", &["abc", "xyz"])
///     .unwrap();
/// assert_eq!(url, "/password/reset/key/abc-xyz/");
/// ```
///
/// # Errors
///
/// Returns [`InertiaError::UnknownRoute`] if `name` is not in the table,
/// [`InertiaError::UnexpectedArguments`] if the pattern has no placeholders
/// (even for an empty list), or [`InertiaError::ArgumentCountMismatch`]
/// stating the expected count when the lengths differ.
pub fn reverse_positional<V>(table: &RouteTable, name: &str, args: &[V]) -> InertiaResult<String>
where
    V: fmt::Display,
{
    let pattern = lookup(table, name)?;

    if pattern.is_static() {
        return Err(InertiaError::UnexpectedArguments {
            route: name.to_string(),
        });
    }

    if args.len() != pattern.placeholder_count() {
        return Err(InertiaError::ArgumentCountMismatch {
            route: name.to_string(),
            expected: pattern.placeholder_count(),
            given: args.len(),
        });
    }

    let values: Vec<String> = args.iter().map(ToString::to_string).collect();
    Ok(pattern.render(&values))
}

/// Looks up a route by name.
fn lookup<'t>(table: &'t RouteTable, name: &str) -> InertiaResult<&'t RoutePattern> {
    table
        .get(name)
        .ok_or_else(|| InertiaError::UnknownRoute(name.to_string()))
}
