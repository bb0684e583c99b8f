//! Opaque credentials handed to the widget by its host.
//!
//! The widget never interprets credentials: they are forwarded verbatim as
//! the `credentials` query parameter. No plaintext credentials appear in
//! logs or debug output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization material obtained by an external auth flow.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(String);

impl Credentials {
    /// Wraps a credential value as supplied by the host.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw value for forwarding to the backend.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(<redacted>)")
    }
}

impl From<String> for Credentials {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Credentials {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
