//! Error types for the fnforge client libraries.
//!
//! Every backend or transport failure is normalized into a single [`Error`]
//! before it reaches callers; no raw transport errors escape the client.

use serde_json::Value;
use thiserror::Error;

/// Classification of a normalized error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response was received (connectivity, DNS, TLS, CORS).
    Network,
    /// A 401 left unresolved after the refresh protocol, or a failed login.
    Auth,
    /// A 4xx response with a normalized message.
    Validation,
    /// A 5xx response with a normalized message.
    Server,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Network => "network",
            ErrorKind::Auth => "auth",
            ErrorKind::Validation => "validation",
            ErrorKind::Server => "server",
        };
        write!(f, "{}", name)
    }
}

/// The unified error type for fnforge operations.
///
/// `Display` renders the normalized message alone, so errors can be shown
/// to users directly; [`Error::kind`] exposes the taxonomy for callers
/// that branch on failure class.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response.
    #[error("{message}")]
    Network { message: String },

    /// Authentication failed and could not be recovered.
    #[error("{message}")]
    Auth { message: String },

    /// The backend rejected the request (4xx).
    #[error("{message}")]
    Validation { status: u16, message: String },

    /// The backend failed to handle the request (5xx).
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A value was rejected before any request was made.
    #[error("{message}")]
    InvalidInput { message: String },
}

impl Error {
    /// Build the error for an unreachable backend.
    ///
    /// The message names the configured base URL so users can tell which
    /// backend was being contacted.
    pub fn unreachable(base_url: &str) -> Self {
        Error::Network {
            message: format!(
                "Network error: unable to connect to {}. Check that the backend is running and CORS is enabled.",
                base_url
            ),
        }
    }

    /// Build the error for an expired session (401 after refresh was
    /// attempted or was impossible).
    pub fn session_expired() -> Self {
        Error::Auth {
            message: "Session expired. Please login again.".to_string(),
        }
    }

    /// Build the error for a rejected login attempt.
    pub fn invalid_credentials() -> Self {
        Error::Auth {
            message: "Invalid credentials. Please check your email and password.".to_string(),
        }
    }

    /// Normalize a non-2xx response into an error.
    ///
    /// `reason` is the HTTP reason phrase used in the final fallback
    /// (`"<status> <reason>"`). 5xx maps to [`Error::Server`], everything
    /// else to [`Error::Validation`]; 401 is handled by the executor before
    /// this point.
    pub fn from_response(status: u16, reason: &str, body: &str) -> Self {
        let message = normalize_message(status, reason, body);
        if status >= 500 {
            Error::Server { status, message }
        } else {
            Error::Validation { status, message }
        }
    }

    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network { .. } => ErrorKind::Network,
            Error::Auth { .. } => ErrorKind::Auth,
            Error::Validation { .. } | Error::InvalidInput { .. } => ErrorKind::Validation,
            Error::Server { .. } => ErrorKind::Server,
        }
    }

    /// Returns the normalized message.
    pub fn message(&self) -> &str {
        match self {
            Error::Network { message }
            | Error::Auth { message }
            | Error::Validation { message, .. }
            | Error::Server { message, .. }
            | Error::InvalidInput { message } => message,
        }
    }

    /// Returns the HTTP status, when the backend produced a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Validation { status, .. } | Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extract a human-readable message from a backend error body.
///
/// Classification order: a `detail` string, a `message` string, a
/// `non_field_errors` array (joined with spaces) or string, then a
/// field-error map rendered as `"<field>: <value>"` pairs. Bodies that are
/// not JSON objects fall back to the raw text when short, or
/// `"<status> <reason>"`.
fn normalize_message(status: u16, reason: &str, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(detail) = map.get("detail").and_then(Value::as_str) {
            return detail.to_string();
        }
        if let Some(message) = map.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
        match map.get("non_field_errors") {
            Some(Value::Array(items)) => {
                let joined = items
                    .iter()
                    .map(flatten_value)
                    .collect::<Vec<_>>()
                    .join(" ");
                if !joined.is_empty() {
                    return joined;
                }
            }
            Some(Value::String(s)) => return s.clone(),
            _ => {}
        }
        let fields: Vec<String> = map
            .iter()
            .map(|(field, value)| {
                let msg = match value {
                    Value::Array(items) => {
                        items.first().map(flatten_value).unwrap_or_default()
                    }
                    other => flatten_value(other),
                };
                format!("{}: {}", field, msg)
            })
            .collect();
        if !fields.is_empty() {
            return fields.join(", ");
        }
    }

    let text = body.trim();
    if !text.is_empty() && text.len() < 200 {
        return text.to_string();
    }
    format!("{} {}", status, reason)
}

/// Render a JSON value without quoting plain strings.
fn flatten_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_wins() {
        let err = Error::from_response(403, "Forbidden", r#"{"detail": "Not allowed."}"#);
        assert_eq!(err.message(), "Not allowed.");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn message_field_second() {
        let err = Error::from_response(
            400,
            "Bad Request",
            r#"{"message": "Missing config", "other": "ignored"}"#,
        );
        assert_eq!(err.message(), "Missing config");
    }

    #[test]
    fn non_field_errors_joined_with_space() {
        let err = Error::from_response(400, "Bad Request", r#"{"non_field_errors": ["bad combo"]}"#);
        assert_eq!(err.message(), "bad combo");

        let err = Error::from_response(
            400,
            "Bad Request",
            r#"{"non_field_errors": ["too short", "too simple"]}"#,
        );
        assert_eq!(err.message(), "too short too simple");
    }

    #[test]
    fn field_map_renders_first_element() {
        let err = Error::from_response(400, "Bad Request", r#"{"name": ["already exists"]}"#);
        assert_eq!(err.message(), "name: already exists");
    }

    #[test]
    fn field_map_joins_multiple_fields() {
        let err = Error::from_response(
            400,
            "Bad Request",
            r#"{"email": ["invalid"], "password": "too weak"}"#,
        );
        assert_eq!(err.message(), "email: invalid, password: too weak");
    }

    #[test]
    fn short_text_body_passes_through() {
        let err = Error::from_response(502, "Bad Gateway", "upstream unavailable");
        assert_eq!(err.message(), "upstream unavailable");
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn long_or_empty_body_falls_back_to_status() {
        let long = "x".repeat(300);
        let err = Error::from_response(500, "Internal Server Error", &long);
        assert_eq!(err.message(), "500 Internal Server Error");

        let err = Error::from_response(503, "Service Unavailable", "");
        assert_eq!(err.message(), "503 Service Unavailable");
    }

    #[test]
    fn five_hundreds_are_server_errors() {
        assert_eq!(
            Error::from_response(500, "Internal Server Error", "{}").kind(),
            ErrorKind::Server
        );
        assert_eq!(
            Error::from_response(404, "Not Found", "{}").kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn display_is_the_bare_message() {
        let err = Error::from_response(400, "Bad Request", r#"{"detail": "nope"}"#);
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn unreachable_names_the_base_url() {
        let err = Error::unreachable("http://localhost:8000");
        assert!(err.message().contains("http://localhost:8000"));
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}
