//! Status API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::cursor::Cursor;

/// Query string of a status fetch
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusQuery {
    pub from_date: Cursor,
}
