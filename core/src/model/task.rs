use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eisenhower quadrant a task belongs to. The wire names are the
/// SCREAMING_SNAKE forms used in input, in the store and in JSON output.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::NotUrgentNotImportant
    }
}

impl Priority {
    pub const NAMES: [&'static str; 4] = [
        "URGENT_IMPORTANT",
        "NOT_URGENT_IMPORTANT",
        "URGENT_NOT_IMPORTANT",
        "NOT_URGENT_NOT_IMPORTANT",
    ];

    /// Exact-name lookup, as stored records use it. No normalization.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "URGENT_IMPORTANT" => Some(Priority::UrgentImportant),
            "NOT_URGENT_IMPORTANT" => Some(Priority::NotUrgentImportant),
            "URGENT_NOT_IMPORTANT" => Some(Priority::UrgentNotImportant),
            "NOT_URGENT_NOT_IMPORTANT" => Some(Priority::NotUrgentNotImportant),
            _ => None,
        }
    }

    /// Case-normalized lookup for user input. Unrecognized text is None;
    /// callers decide between the default and keeping an old value.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_name(&s.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::UrgentImportant => "URGENT_IMPORTANT",
            Priority::NotUrgentImportant => "NOT_URGENT_IMPORTANT",
            Priority::UrgentNotImportant => "URGENT_NOT_IMPORTANT",
            Priority::NotUrgentNotImportant => "NOT_URGENT_NOT_IMPORTANT",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Assigned by the storage layer; immutable afterwards. Never reused
    /// within a process lifetime, even after deletes.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Occurrence date, or the start of a range.
    pub date: NaiveDate,
    /// Range end. None means a single date or an open-ended range; the
    /// two are the same state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub priority: Priority,
}
