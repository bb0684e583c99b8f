//! Rendering projection from widget state to a display list.
//!
//! Projection is pure: it borrows the loaded records and never mutates them.

use chrono::{DateTime, Utc};
use data_form_core::Scope;
use data_form_integration::Record;
use serde::{Deserialize, Serialize};

/// Notice shown when a scope is selected but nothing is loaded.
pub const NO_DATA_FOR_SCOPE: &str = "No data loaded for the chosen scope";

/// Notice shown for integrations without scopes when nothing is loaded.
pub const NO_DATA: &str = "No data loaded";

/// Which record fields are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordLayout {
    /// ID, name, email and created date.
    #[default]
    Compact,
    /// Compact fields plus first name, last name and last-modified date.
    Detailed,
}

/// One label/value pair on a record card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A projected record, keyed by its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCard {
    pub key: String,
    pub fields: Vec<Field>,
}

/// What the widget shows below its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// Nothing: a scope must be chosen first.
    Hidden,
    /// An empty-state notice.
    Notice(&'static str),
    /// One card per loaded record, in load order.
    Records(Vec<RecordCard>),
}

/// Projects the widget state to a display.
#[must_use]
pub fn project(
    scope_gated: bool,
    selected: Option<Scope>,
    records: &[Record],
    layout: RecordLayout,
) -> Rendering {
    if scope_gated && selected.is_none() {
        return Rendering::Hidden;
    }
    if records.is_empty() {
        let notice = if scope_gated { NO_DATA_FOR_SCOPE } else { NO_DATA };
        return Rendering::Notice(notice);
    }
    Rendering::Records(records.iter().map(|r| card(r, layout)).collect())
}

fn card(record: &Record, layout: RecordLayout) -> RecordCard {
    let props = &record.properties;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let date = |value: &Option<String>| value.as_deref().map(format_timestamp).unwrap_or_default();

    let mut fields = vec![
        Field::new("ID", record.id.clone()),
        Field::new("Name", record.name.clone()),
        Field::new("Email", text(&props.email)),
        Field::new("Created Date", date(&props.createdate)),
    ];
    if layout == RecordLayout::Detailed {
        fields.push(Field::new("First Name", text(&props.firstname)));
        fields.push(Field::new("Last Name", text(&props.lastname)));
        fields.push(Field::new("Last Modified Date", date(&props.lastmodifieddate)));
    }

    RecordCard {
        key: record.id.clone(),
        fields,
    }
}

/// Formats an RFC 3339 timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// Values that do not parse are returned verbatim.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str) -> Record {
        Record::new(id, format!("Contact {id}"))
            .with_email(format!("{id}@example.com"))
            .with_created("2024-01-15T10:30:00.000Z")
    }

    #[test]
    fn gated_without_scope_shows_nothing() {
        let records = vec![contact("1"), contact("2")];
        assert_eq!(
            project(true, None, &records, RecordLayout::Compact),
            Rendering::Hidden
        );
        assert_eq!(
            project(true, None, &[], RecordLayout::Compact),
            Rendering::Hidden
        );
    }

    #[test]
    fn gated_with_scope_and_no_records_shows_notice() {
        assert_eq!(
            project(true, Some(Scope::Contacts), &[], RecordLayout::Compact),
            Rendering::Notice(NO_DATA_FOR_SCOPE)
        );
    }

    #[test]
    fn ungated_empty_shows_plain_notice() {
        assert_eq!(
            project(false, None, &[], RecordLayout::Compact),
            Rendering::Notice(NO_DATA)
        );
    }

    #[test]
    fn compact_cards() {
        let records = vec![contact("7")];
        let Rendering::Records(cards) =
            project(true, Some(Scope::Contacts), &records, RecordLayout::Compact)
        else {
            panic!("expected records");
        };

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].key, "7");
        assert_eq!(
            cards[0].fields,
            vec![
                Field::new("ID", "7"),
                Field::new("Name", "Contact 7"),
                Field::new("Email", "7@example.com"),
                Field::new("Created Date", "2024-01-15 10:30 UTC"),
            ]
        );
    }

    #[test]
    fn detailed_cards_add_name_parts_and_blank_missing_values() {
        let mut record = contact("3");
        record.properties.firstname = Some("Grace".to_string());
        record.properties.lastmodifieddate = Some("yesterday".to_string());

        let Rendering::Records(cards) =
            project(false, None, &[record], RecordLayout::Detailed)
        else {
            panic!("expected records");
        };

        let labels: Vec<_> = cards[0].fields.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec![
                "ID",
                "Name",
                "Email",
                "Created Date",
                "First Name",
                "Last Name",
                "Last Modified Date"
            ]
        );
        assert_eq!(cards[0].fields[4].value, "Grace");
        assert_eq!(cards[0].fields[5].value, "");
        assert_eq!(cards[0].fields[6].value, "yesterday");
    }

    #[test]
    fn cards_follow_load_order() {
        let records = vec![contact("b"), contact("a"), contact("c")];
        let Rendering::Records(cards) = project(false, None, &records, RecordLayout::Compact)
        else {
            panic!("expected records");
        };
        let keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn timestamps_normalize_to_utc() {
        assert_eq!(
            format_timestamp("2024-03-01T23:45:00+02:00"),
            "2024-03-01 21:45 UTC"
        );
        assert_eq!(format_timestamp("1700000000000"), "1700000000000");
    }
}
