use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;
use crate::time::parse_date;

/// Sentinel token for an open-ended range, accepted case-insensitively.
pub const FOREVER: &str = "FOREVER";

/// A single date or a `start>end` span. An absent end means the range
/// never closes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn single(start: NaiveDate) -> Self {
        DateRange { start, end: None }
    }

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DD>YYYY-MM-DD`, `YYYY-MM-DD>FOREVER`
    /// or `YYYY-MM-DD>`. The start must be a real date; only the end may
    /// be open. Any malformed date fails the whole parse.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        let Some((start, end)) = input.split_once('>') else {
            return Ok(DateRange::single(parse_date(input)?));
        };

        let start = start.trim();
        if start.is_empty() || start.eq_ignore_ascii_case(FOREVER) {
            return Err(ParseError::BadDateRange(input.to_string()));
        }
        let start = parse_date(start)?;

        let end = end.trim();
        let end = if end.is_empty() || end.eq_ignore_ascii_case(FOREVER) {
            None
        } else {
            Some(parse_date(end)?)
        };

        Ok(DateRange { start, end })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}>{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}
