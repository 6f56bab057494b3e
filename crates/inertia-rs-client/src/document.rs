//! Scraping values out of a server-rendered document.
//!
//! The bootstrap needs exactly two reads from the rendered HTML: the JSON
//! text of the page payload element and the value of the hidden CSRF input.
//! This module provides both without pulling in a DOM: a rendered Django
//! template is regular enough for attribute-scanning to be reliable.

use once_cell::sync::Lazy;
use regex::Regex;

use inertia_rs_core::{InertiaError, InertiaResult};

/// Matches any `<input ...>` tag.
static INPUT_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<input\b[^>]*>").unwrap()
});

/// Matches a single `attr="value"` pair inside a tag.
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)([a-zA-Z][a-zA-Z0-9-]*)\s*=\s*"([^"]*)""#).unwrap()
});

/// Returns the inner text of the element with the given `id`.
///
/// This is the client's `document.getElementById(id).textContent`: it finds
/// the first element carrying the id and returns everything up to that
/// element's closing tag, trimmed. The element must not nest further
/// elements of its own tag name.
///
/// # Examples
///
/// ```
/// use inertia_rs_client::document::element_text;
///
/// let html = r#"<script id="page" type="application/json">{"a": 1}</script>"#;
/// assert_eq!(element_text(html, "page").unwrap(), r#"{"a": 1}"#);
/// ```
///
/// # Errors
///
/// Returns [`InertiaError::MissingElement`] if no element carries the id or
/// the element is never closed.
pub fn element_text(document: &str, id: &str) -> InertiaResult<String> {
    let open_re = Regex::new(&format!(
        r#"(?is)<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*\sid\s*=\s*"{}"[^>]*>"#,
        regex::escape(id)
    ))
    .map_err(|e| InertiaError::ImproperlyConfigured(format!("Invalid element id '{id}': {e}")))?;

    let Some(caps) = open_re.captures(document) else {
        return Err(InertiaError::MissingElement(format!(
            "no element with id '{id}' in the document"
        )));
    };
    let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
        return Err(InertiaError::MissingElement(format!(
            "no element with id '{id}' in the document"
        )));
    };

    let rest = &document[whole.end()..];
    let close = format!("</{}", tag.as_str()).to_ascii_lowercase();
    let end = rest
        .to_ascii_lowercase()
        .find(&close)
        .ok_or_else(|| {
            InertiaError::MissingElement(format!("element with id '{id}' is never closed"))
        })?;

    Ok(rest[..end].trim().to_string())
}

/// Returns the `value` attribute of the first `<input>` with the given
/// `name`.
///
/// This is the client's
/// `document.getElementsByName(name)[0].value`, used to pluck the hidden
/// CSRF field out of a rendered form.
///
/// # Errors
///
/// Returns [`InertiaError::MissingElement`] if no input carries the name or
/// the input has no `value` attribute.
pub fn input_value(document: &str, name: &str) -> InertiaResult<String> {
    for tag in INPUT_TAG_RE.find_iter(document) {
        let mut name_attr = None;
        let mut value_attr = None;
        for attr in ATTR_RE.captures_iter(tag.as_str()) {
            match attr[1].to_ascii_lowercase().as_str() {
                "name" => name_attr = Some(attr[2].to_string()),
                "value" => value_attr = Some(attr[2].to_string()),
                _ => {}
            }
        }
        if name_attr.as_deref() == Some(name) {
            return value_attr.ok_or_else(|| {
                InertiaError::MissingElement(format!("input '{name}' has no value attribute"))
            });
        }
    }

    Err(InertiaError::MissingElement(format!(
        "no input named '{name}' in the document"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head><title>Log in</title></head>
<body>
<form method="post" action="/login">
<input type="hidden" name="csrfmiddlewaretoken" value="p0Xb7c...token">
<input type="email" name="email" value="">
</form>
<script id="page" type="application/json">
{"component": "Login", "props": {"errors": {}}, "url": "/login"}
</script>
<div id="app"></div>
</body>
</html>"#;

    #[test]
    fn test_element_text_extracts_payload() {
        let text = element_text(LOGIN_DOCUMENT, "page").unwrap();
        assert!(text.starts_with('{'));
        assert!(text.contains("\"component\": \"Login\""));
    }

    #[test]
    fn test_element_text_missing_id() {
        let err = element_text(LOGIN_DOCUMENT, "payload").unwrap_err();
        assert!(matches!(err, InertiaError::MissingElement(_)));
    }

    #[test]
    fn test_element_text_empty_element() {
        assert_eq!(element_text(LOGIN_DOCUMENT, "app").unwrap(), "");
    }

    #[test]
    fn test_element_text_unclosed_element() {
        let html = r#"<div id="page">text"#;
        assert!(element_text(html, "page").is_err());
    }

    #[test]
    fn test_element_text_id_with_regex_metacharacters() {
        let html = r#"<div id="pa.ge">x</div><div id="page">y</div>"#;
        assert_eq!(element_text(html, "pa.ge").unwrap(), "x");
        assert_eq!(element_text(html, "page").unwrap(), "y");
    }

    #[test]
    fn test_input_value_finds_csrf_field() {
        let value = input_value(LOGIN_DOCUMENT, "csrfmiddlewaretoken").unwrap();
        assert_eq!(value, "p0Xb7c...token");
    }

    #[test]
    fn test_input_value_first_match_wins() {
        let html = r#"<input name="f" value="one"><input name="f" value="two">"#;
        assert_eq!(input_value(html, "f").unwrap(), "one");
    }

    #[test]
    fn test_input_value_attribute_order_irrelevant() {
        let html = r#"<input value="tok" type="hidden" name="csrfmiddlewaretoken">"#;
        assert_eq!(input_value(html, "csrfmiddlewaretoken").unwrap(), "tok");
    }

    #[test]
    fn test_input_value_missing_input() {
        let err = input_value(LOGIN_DOCUMENT, "captcha").unwrap_err();
        assert!(matches!(err, InertiaError::MissingElement(_)));
    }

    #[test]
    fn test_input_value_without_value_attribute() {
        let html = r#"<input type="checkbox" name="remember">"#;
        assert!(input_value(html, "remember").is_err());
    }
}
