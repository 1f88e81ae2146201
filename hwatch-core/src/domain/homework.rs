//! Homework status records

use crate::domain::cursor::Cursor;

/// One observation of a tracked homework as reported by the status API.
///
/// Fields are optional here: the validator only checks the payload shape,
/// presence of the name and status is enforced when formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRecord {
    /// `homework_name` field of the API record
    pub name: Option<String>,
    /// `status` field of the API record
    pub status: Option<String>,
}

impl StatusRecord {
    /// Creates a fully populated record
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    /// Name for log lines, `<unnamed>` when absent
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "<unnamed>",
        }
    }
}

/// Validated payload of one status fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Records in the order the API returned them
    pub records: Vec<StatusRecord>,
    /// Cursor to use for the next fetch
    pub cursor: Cursor,
}
