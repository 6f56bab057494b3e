//! URL pattern templates and placeholder parsing.
//!
//! This module provides [`RoutePattern`], a URL template string parsed once
//! into literal and `<name>` placeholder segments. Patterns are produced by
//! the server-side routing system in Django's `path()` placeholder syntax,
//! with the converter prefix already stripped (the client only substitutes,
//! it never matches).

use inertia_rs_core::{InertiaError, InertiaResult};

/// One piece of a parsed URL template: literal text or a named placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A URL template parsed into substitution segments.
///
/// Parsing happens exactly once, at route-table construction; reversal is a
/// pure walk over the parsed segments. The original template text is kept
/// verbatim so that zero-placeholder patterns reverse to the exact string
/// the server emitted.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    /// The original template string (e.g. `"/manage/user/<user_id>/"`).
    template: String,
    /// The parsed literal/placeholder segments, in order.
    segments: Vec<Segment>,
    /// Placeholder names in left-to-right pattern order.
    placeholders: Vec<String>,
}

impl RoutePattern {
    /// Parses a URL template into a `RoutePattern`.
    ///
    /// Placeholder names must be non-empty, consist of word characters
    /// (ASCII alphanumerics and `_`), and be unique within the template.
    ///
    /// # Examples
    ///
    /// ```
    /// use inertia_rs_routes::pattern::RoutePattern;
    ///
    /// let pattern = RoutePattern::parse("/manage/user/<user_id>/").unwrap();
    /// assert_eq!(pattern.placeholders(), ["user_id"]);
    /// assert!(!pattern.is_static());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::ImproperlyConfigured`] on an unclosed angle
    /// bracket, an empty or non-word placeholder name, or a duplicate
    /// placeholder name.
    pub fn parse(template: &str) -> InertiaResult<Self> {
        let mut segments = Vec::new();
        let mut placeholders: Vec<String> = Vec::new();
        let mut remaining = template;

        while !remaining.is_empty() {
            if let Some(start) = remaining.find('<') {
                if start > 0 {
                    segments.push(Segment::Literal(remaining[..start].to_string()));
                }

                let end = remaining[start..].find('>').ok_or_else(|| {
                    InertiaError::ImproperlyConfigured(format!(
                        "Unclosed angle bracket in route template: {template}"
                    ))
                })? + start;

                let name = &remaining[start + 1..end];
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    return Err(InertiaError::ImproperlyConfigured(format!(
                        "Invalid placeholder name '{name}' in route template: {template}"
                    )));
                }
                if placeholders.iter().any(|p| p == name) {
                    return Err(InertiaError::ImproperlyConfigured(format!(
                        "Duplicate placeholder '{name}' in route template: {template}"
                    )));
                }

                placeholders.push(name.to_string());
                segments.push(Segment::Placeholder(name.to_string()));

                remaining = &remaining[end + 1..];
            } else {
                // No more angle brackets, the rest is literal
                segments.push(Segment::Literal(remaining.to_string()));
                break;
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
            placeholders,
        })
    }

    /// Returns the original template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the placeholder names in left-to-right pattern order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Returns the number of placeholders in the template.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// Returns `true` if the template contains no placeholders.
    pub fn is_static(&self) -> bool {
        self.placeholders.is_empty()
    }

    /// Renders the template with the k-th placeholder replaced by the k-th
    /// value. Callers must supply exactly one value per placeholder.
    pub(crate) fn render(&self, values: &[String]) -> String {
        debug_assert_eq!(values.len(), self.placeholders.len());

        let mut out = String::with_capacity(self.template.len());
        let mut next = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(_) => {
                    if let Some(value) = values.get(next) {
                        out.push_str(value);
                    }
                    next += 1;
                }
            }
        }
        out
    }
}
