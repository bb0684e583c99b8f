//! Error types for the widget crate.
//!
//! - `LoadError`: Why a single Load did not replace the records
//! - `SelectError`: Why a scope selection was rejected

use data_form_core::{Integration, Scope, UnknownIntegration};
use data_form_integration::FetchError;
use std::fmt;

/// Message shown when a failure carries no detail of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to load data";

/// Errors from a Load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The configured integration is not a known one; no request was sent.
    UnknownIntegration(UnknownIntegration),
    /// The integration is scope-gated and no scope is selected; no request
    /// was sent.
    ScopeRequired { integration: Integration },
    /// The request was sent and failed.
    Fetch(FetchError),
}

impl LoadError {
    /// Returns the message presented to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownIntegration(err) => {
                format!("Unknown integration: {}", err.name)
            }
            Self::ScopeRequired { integration } => {
                format!("Select a {integration} scope before loading data")
            }
            Self::Fetch(err) => err
                .detail()
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIntegration(err) => write!(f, "{err}"),
            Self::ScopeRequired { integration } => {
                write!(f, "no scope selected for scope-gated integration {integration}")
            }
            Self::Fetch(err) => write!(f, "fetch failed: {err}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<FetchError> for LoadError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

/// Errors from selecting a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The key matches no scope label or value.
    UnknownScope { key: String },
    /// The scope exists but the integration does not offer it.
    NotOffered { scope: Scope },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownScope { key } => write!(f, "unknown scope: '{key}'"),
            Self::NotOffered { scope } => {
                write!(f, "scope '{scope}' is not offered by this integration")
            }
        }
    }
}

impl std::error::Error for SelectError {}
