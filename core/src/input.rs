//! Parser for the pipe-delimited command input.
//!
//! Grammar: `title|description|date-or-range|priority`, up to four
//! segments, trailing segments optional. Blank segments are recorded as
//! absent rather than empty so an edit can keep the old value while an
//! insert falls back to the defaults.

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::model::{DateRange, Priority, Task};

const MAX_SEGMENTS: usize = 4;

/// A parsed command input before defaults are resolved. `None` means the
/// segment was absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub range: Option<DateRange>,
    pub priority: Option<Priority>,
}

/// Parse a raw `title|description|date-or-range|priority` string.
///
/// Dates are the only hard failure: a malformed date anywhere rejects the
/// whole input. An unrecognized priority is treated as absent.
pub fn parse_input(raw: &str) -> Result<TaskDraft, ParseError> {
    let mut segments = raw.splitn(MAX_SEGMENTS, '|').map(str::trim);

    let title = segments.next().filter(|s| !s.is_empty()).map(String::from);
    let description = segments.next().filter(|s| !s.is_empty()).map(String::from);
    let range = match segments.next() {
        None | Some("") => None,
        Some(text) => Some(DateRange::parse(text)?),
    };
    let priority = segments.next().and_then(Priority::parse);

    Ok(TaskDraft {
        title,
        description,
        range,
        priority,
    })
}

impl TaskDraft {
    /// Resolve an insert: absent text fields become empty, an absent
    /// range becomes a single date of `today`, an absent priority becomes
    /// the default quadrant. The id is a placeholder until the storage
    /// layer assigns one.
    pub fn into_task(self, today: NaiveDate) -> Task {
        let range = self.range.unwrap_or_else(|| DateRange::single(today));
        Task {
            id: 0,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            date: range.start,
            end_date: range.end,
            priority: self.priority.unwrap_or_default(),
        }
    }

    /// Resolve an edit: every absent segment keeps the existing value,
    /// priority included.
    pub fn merge_into(self, existing: &Task) -> Task {
        let range = self.range.unwrap_or(DateRange {
            start: existing.date,
            end: existing.end_date,
        });
        Task {
            id: existing.id,
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            date: range.start,
            end_date: range.end,
            priority: self.priority.unwrap_or(existing.priority),
        }
    }
}
