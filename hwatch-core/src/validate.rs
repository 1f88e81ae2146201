//! Status API response validation
//!
//! Checks the shape of a decoded response and extracts the records and the
//! next cursor. Validation fails closed: a malformed payload is an error,
//! never an empty batch.

use serde_json::{Map, Value};

use crate::domain::cursor::Cursor;
use crate::domain::homework::{FetchResult, StatusRecord};
use crate::error::SchemaError;

/// Field holding the list of homework records
pub const RECORDS_FIELD: &str = "homeworks";

/// Field holding the server-side timestamp of the response
pub const CURSOR_FIELD: &str = "current_date";

/// Validates a decoded status API response
pub fn validate(payload: &Value) -> Result<FetchResult, SchemaError> {
    let object = payload
        .as_object()
        .ok_or_else(|| SchemaError::NotAnObject(truncate(payload)))?;

    let raw_records = object
        .get(RECORDS_FIELD)
        .ok_or(SchemaError::MissingField(RECORDS_FIELD))?
        .as_array()
        .ok_or(SchemaError::NotAList(RECORDS_FIELD))?;

    let records = raw_records
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .as_object()
                .map(parse_record)
                .ok_or(SchemaError::RecordNotAnObject { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cursor = object
        .get(CURSOR_FIELD)
        .ok_or(SchemaError::MissingField(CURSOR_FIELD))?;
    let cursor = cursor
        .as_u64()
        .map(Cursor::new)
        .ok_or_else(|| SchemaError::InvalidCursor(cursor.to_string()))?;

    Ok(FetchResult { records, cursor })
}

/// Extracts a record candidate; non-string fields count as absent
fn parse_record(object: &Map<String, Value>) -> StatusRecord {
    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
    StatusRecord {
        name: text("homework_name"),
        status: text("status"),
    }
}

fn truncate(payload: &Value) -> String {
    const MAX: usize = 200;
    let text = payload.to_string();
    match text.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text,
    }
}
