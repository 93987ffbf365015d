use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One registered person. The store's `Vec<Record>` position is the only
/// identity a record has during a session; there is no generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub id_number: String,
    pub age: u8,
    pub email: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    /// Absent until the record is edited for the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw field values as submitted by the presentation layer, before
/// validation. Everything is a string here; parsing the age is a
/// validation step, not the caller's job. An empty (post-trim) string is
/// the one and only "no input" representation — placeholder sentinels stay
/// on the presentation side.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub name: String,
    pub id_number: String,
    pub age: String,
    pub email: String,
    pub postal_code: String,
}

impl RecordDraft {
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<String>,
        age: impl Into<String>,
        email: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id_number: id_number.into(),
            age: age.into(),
            email: email.into(),
            postal_code: postal_code.into(),
        }
    }
}

impl From<&Record> for RecordDraft {
    /// Pre-fill a draft from a stored record, the way an edit form is
    /// pre-filled from the selected row.
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            id_number: record.id_number.clone(),
            age: record.age.to_string(),
            email: record.email.clone(),
            postal_code: record.postal_code.clone(),
        }
    }
}

/// Output of a successful validation pass: trimmed, parsed field values
/// ready to become (or replace) a [`Record`]. Only the validator constructs
/// this, which is what lets the store trust its callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRecord {
    pub name: String,
    pub id_number: String,
    pub age: u8,
    pub email: String,
    pub postal_code: String,
}
