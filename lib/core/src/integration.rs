//! The closed set of integrations the widget can query.
//!
//! Each integration has a display name (what the host supplies) and a
//! backend path segment (what the request URL is built from).

use crate::scope::Scope;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A known external data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Integration {
    /// Notion workspace pages and databases.
    Notion,
    /// Airtable bases.
    Airtable,
    /// HubSpot CRM objects.
    HubSpot,
}

impl Integration {
    /// Every known integration, in presentation order.
    pub const ALL: &'static [Integration] =
        &[Integration::Notion, Integration::Airtable, Integration::HubSpot];

    /// Returns the human-readable name used as the lookup key.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Notion => "Notion",
            Self::Airtable => "Airtable",
            Self::HubSpot => "HubSpot",
        }
    }

    /// Returns the backend path segment for this integration.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Notion => "notion",
            Self::Airtable => "airtable",
            Self::HubSpot => "hubspot",
        }
    }

    /// Returns the scopes this integration can be narrowed to.
    ///
    /// An empty slice means the integration is not scope-gated.
    #[must_use]
    pub const fn scopes(&self) -> &'static [Scope] {
        match self {
            Self::HubSpot => Scope::ALL,
            Self::Notion | Self::Airtable => &[],
        }
    }

    /// Returns true if a scope must be chosen before records are shown.
    #[must_use]
    pub const fn is_scope_gated(&self) -> bool {
        !self.scopes().is_empty()
    }

    /// Looks up an integration by its exact display name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|integration| integration.display_name() == name)
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Resolves a display name to its backend path segment.
///
/// Returns `None` for names outside the known set; callers must not issue
/// a request in that case.
#[must_use]
pub fn resolve_endpoint(name: &str) -> Option<&'static str> {
    Integration::from_display_name(name).map(|integration| integration.endpoint())
}

/// Error returned when a display name is not a known integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIntegration {
    /// The name that failed to resolve.
    pub name: String,
}

impl fmt::Display for UnknownIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown integration: '{}'", self.name)
    }
}

impl std::error::Error for UnknownIntegration {}

impl FromStr for Integration {
    type Err = UnknownIntegration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(s).ok_or_else(|| UnknownIntegration {
            name: s.to_string(),
        })
    }
}
