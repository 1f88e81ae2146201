//! Review verdict vocabulary

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Known review outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// Status code as sent by the API
    pub fn code(self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Parses an API status code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    /// Default notification text for this verdict
    pub fn default_text(self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Mapping from status code to notification text.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct VerdictTable {
    texts: HashMap<Verdict, String>,
}

impl VerdictTable {
    /// Text for a raw status code, `None` for undocumented codes
    pub fn text_for(&self, code: &str) -> Option<&str> {
        let verdict = Verdict::from_code(code)?;
        self.texts.get(&verdict).map(String::as_str)
    }
}

impl Default for VerdictTable {
    fn default() -> Self {
        let texts = Verdict::ALL
            .into_iter()
            .map(|v| (v, v.default_text().to_string()))
            .collect();
        Self { texts }
    }
}
