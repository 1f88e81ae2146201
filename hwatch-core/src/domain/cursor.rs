//! Fetch window cursor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the next fetch window, in seconds since the Unix epoch.
///
/// Sent to the status API as `from_date` and read back from the
/// `current_date` field of every successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(u64);

impl Cursor {
    /// Creates a cursor from a raw epoch timestamp
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Cursor pointing at the current wall-clock time
    pub fn now() -> Self {
        // Clocks set before 1970 clamp to zero rather than wrap.
        let seconds = chrono::Utc::now().timestamp().max(0) as u64;
        Self(seconds)
    }

    /// Raw epoch seconds
    pub const fn as_secs(self) -> u64 {
        self.0
    }
}

impl From<u64> for Cursor {
    fn from(seconds: u64) -> Self {
        Self(seconds)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
