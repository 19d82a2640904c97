use chrono::{Local, NaiveDate};

use crate::error::ParseError;

/// Parse a calendar date. The grammar is strict ISO-8601 (`YYYY-MM-DD`);
/// there are no relative or human-friendly forms.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ParseError::BadDateRange(input.to_string()))
}

/// Today's date on the local calendar. Used as the default when input
/// omits a date entirely.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
