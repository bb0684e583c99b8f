//! Scope catalog: the sub-resources an integration can be narrowed to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sub-resource selector with a display label and a backend query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// CRM contacts.
    Contacts,
    /// CRM companies.
    Companies,
    /// CRM deals.
    Deals,
}

impl Scope {
    /// Every scope, in presentation order.
    pub const ALL: &'static [Scope] = &[Scope::Contacts, Scope::Companies, Scope::Deals];

    /// Returns the label shown in the scope picker.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Contacts => "Contacts",
            Self::Companies => "Companies",
            Self::Deals => "Deals",
        }
    }

    /// Returns the value sent as the `scope` query parameter.
    #[must_use]
    pub const fn query_value(&self) -> &'static str {
        match self {
            Self::Contacts => "crm/v3/objects/contacts",
            Self::Companies => "crm/v3/objects/companies",
            Self::Deals => "crm/v3/objects/deals",
        }
    }

    /// Looks up a scope by its label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|scope| scope.label() == label)
    }

    /// Looks up a scope by its backend query value.
    #[must_use]
    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|scope| scope.query_value() == value)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
