//! Status record formatting

use crate::domain::homework::StatusRecord;
use crate::domain::verdict::VerdictTable;
use crate::error::FormatError;

/// Turns status records into notification text
#[derive(Debug, Clone, Default)]
pub struct StatusFormatter {
    verdicts: VerdictTable,
}

impl StatusFormatter {
    /// Creates a formatter over the given verdict table
    pub fn new(verdicts: VerdictTable) -> Self {
        Self { verdicts }
    }

    /// Formats one record as `Status changed for "<name>". <verdict>`
    pub fn format(&self, record: &StatusRecord) -> Result<String, FormatError> {
        let name = record
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(FormatError::MissingField("homework_name"))?;

        let status = record
            .status
            .as_deref()
            .ok_or(FormatError::MissingField("status"))?;

        let verdict = self
            .verdicts
            .text_for(status)
            .ok_or_else(|| FormatError::UnknownVerdict(status.to_string()))?;

        Ok(format!("Status changed for \"{name}\". {verdict}"))
    }
}
