//! Records returned by the backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

/// One item returned by a backend query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, unique within one load result.
    pub id: String,
    /// Display name chosen by the backend. A `null` name is read as empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Property bag.
    pub properties: RecordProperties,
}

impl Record {
    /// Creates a record with an empty property bag.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            properties: RecordProperties::default(),
        }
    }

    /// Sets the email property.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.properties.email = Some(email.into());
        self
    }

    /// Sets the creation timestamp property.
    #[must_use]
    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.properties.createdate = Some(created.into());
        self
    }
}

/// Known record properties.
///
/// Field names follow the backend's wire names. Properties the widget does
/// not render are kept in `extra` so a record is never altered by
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub createdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmodifieddate: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Returns the first identifier that occurs more than once, if any.
#[must_use]
pub fn first_duplicate_id(records: &[Record]) -> Option<&str> {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|record| record.id.as_str())
        .find(|id| !seen.insert(*id))
}
