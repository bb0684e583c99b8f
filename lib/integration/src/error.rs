//! Error types for the integration crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `FetchError`: Errors from a single items request
//! - `ClientError`: Errors building the HTTP client

use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::fmt;

/// Errors from fetching items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    Transport { reason: String },
    /// The backend answered with a non-success status.
    Backend { status: u16, detail: Option<String> },
    /// The backend answered successfully but the body is not a record list.
    MalformedResponse { reason: String },
}

impl FetchError {
    /// Returns the human-readable detail carried by the failure, if any.
    ///
    /// Only backend failures carry a detail; transport and parse failures
    /// are described by the caller's generic message.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Backend { detail, .. } => detail.as_deref(),
            Self::Transport { .. } | Self::MalformedResponse { .. } => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { reason } => {
                write!(f, "request failed: {reason}")
            }
            Self::Backend { status, detail } => {
                if let Some(detail) = detail {
                    write!(f, "backend returned {status}: {detail}")
                } else {
                    write!(f, "backend returned {status}")
                }
            }
            Self::MalformedResponse { reason } => {
                write!(f, "malformed response: {reason}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors constructing an HTTP backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The base URL is empty.
    MissingBaseUrl,
    /// The underlying HTTP client could not be built.
    BuildFailed { reason: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBaseUrl => write!(f, "backend base URL is empty"),
            Self::BuildFailed { reason } => {
                write!(f, "failed to build HTTP client: {reason}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Error body shape produced by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<JsonValue>,
}

/// Extracts the human-readable detail from a failure response body.
///
/// Accepts `{"detail": "..."}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with `; `.
/// Anything else yields `None`.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        JsonValue::String(detail) if !detail.trim().is_empty() => Some(detail),
        JsonValue::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(JsonValue::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display() {
        let err = FetchError::Backend {
            status: 401,
            detail: Some("Invalid credentials".to_string()),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid credentials"));
        assert_eq!(err.detail(), Some("Invalid credentials"));
    }

    #[test]
    fn transport_error_has_no_detail() {
        let err = FetchError::Transport {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn detail_from_string_body() {
        assert_eq!(
            extract_detail(r#"{"detail": "Invalid scope provided."}"#),
            Some("Invalid scope provided.".to_string())
        );
    }

    #[test]
    fn detail_from_validation_list() {
        let body = r#"{"detail": [
            {"loc": ["query", "credentials"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["query", "scope"], "msg": "str type expected"}
        ]}"#;
        assert_eq!(
            extract_detail(body),
            Some("field required; str type expected".to_string())
        );
    }

    #[test]
    fn no_detail_for_unstructured_bodies() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"error": "boom"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
        assert_eq!(extract_detail(r#"{"detail": "  "}"#), None);
        assert_eq!(extract_detail(r#"{"detail": 500}"#), None);
    }
}
