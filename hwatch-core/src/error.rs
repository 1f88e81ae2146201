//! Error types for payload validation and status formatting

use thiserror::Error;

/// A status API response that does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The payload is not a JSON object
    #[error("response is not a JSON object: {0}")]
    NotAnObject(String),

    /// A required top-level field is absent
    #[error("response has no `{0}` field")]
    MissingField(&'static str),

    /// The records field is not an array
    #[error("`{0}` is not a list")]
    NotAList(&'static str),

    /// One of the records is not an object
    #[error("record #{index} is not an object")]
    RecordNotAnObject { index: usize },

    /// The cursor field is not a non-negative integer
    #[error("`current_date` is not a valid timestamp: {0}")]
    InvalidCursor(String),
}

/// A status record that cannot be turned into a notification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A required record field is absent or empty
    #[error("record has no `{0}` field")]
    MissingField(&'static str),

    /// The status code is not part of the verdict vocabulary
    #[error("undocumented homework status: {0:?}")]
    UnknownVerdict(String),
}
