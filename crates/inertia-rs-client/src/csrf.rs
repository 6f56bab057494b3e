//! Client-side CSRF token plumbing.
//!
//! The server issues the token and validates it; the client's only job is to
//! pick the token out of the rendered form and send it back on
//! state-changing requests, either as the hidden form field or as a request
//! header. Requests carrying a stale or missing token are rejected by the
//! server with a 403.

use crate::document;
use inertia_rs_core::{InertiaError, InertiaResult};

/// The default form field name carrying the CSRF token.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// The default request header under which the token is sent back.
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// A CSRF token plucked from a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Extracts the token from the hidden input with the given field name.
    ///
    /// # Examples
    ///
    /// ```
    /// use inertia_rs_client::csrf::{CsrfToken, CSRF_FORM_FIELD};
    ///
    /// let html = r#"<input type="hidden" name="csrfmiddlewaretoken" value="tok123">"#;
    /// let token = CsrfToken::from_document(html, CSRF_FORM_FIELD).unwrap();
    /// assert_eq!(token.as_str(), "tok123");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::MissingElement`] if the input is absent or
    /// its value is empty.
    pub fn from_document(document: &str, field_name: &str) -> InertiaResult<Self> {
        let value = document::input_value(document, field_name)?;
        if value.is_empty() {
            return Err(InertiaError::MissingElement(format!(
                "input '{field_name}' carries an empty token"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `(header name, token)` pair to attach to a
    /// state-changing request.
    pub fn header_pair(&self, header_name: &str) -> (String, String) {
        (header_name.to_string(), self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_document() {
        let html = r#"<form><input type="hidden" name="csrfmiddlewaretoken" value="abc123"></form>"#;
        let token = CsrfToken::from_document(html, CSRF_FORM_FIELD).unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_from_document_missing_field() {
        let html = "<form></form>";
        let err = CsrfToken::from_document(html, CSRF_FORM_FIELD).unwrap_err();
        assert!(matches!(err, InertiaError::MissingElement(_)));
    }

    #[test]
    fn test_from_document_empty_token() {
        let html = r#"<input name="csrfmiddlewaretoken" value="">"#;
        assert!(CsrfToken::from_document(html, CSRF_FORM_FIELD).is_err());
    }

    #[test]
    fn test_from_document_custom_field_name() {
        let html = r#"<input name="_token" value="xyz">"#;
        let token = CsrfToken::from_document(html, "_token").unwrap();
        assert_eq!(token.as_str(), "xyz");
    }

    #[test]
    fn test_header_pair() {
        let html = r#"<input name="csrfmiddlewaretoken" value="abc123">"#;
        let token = CsrfToken::from_document(html, CSRF_FORM_FIELD).unwrap();
        let (name, value) = token.header_pair(CSRF_HEADER);
        assert_eq!(name, "X-XSRF-TOKEN");
        assert_eq!(value, "abc123");
    }
}
