use chrono::NaiveDate;
use thiserror::Error;

/// Errors from parsing raw command input. Priority segments never produce
/// one of these: an unrecognized priority falls back silently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid date or range '{0}', expected YYYY-MM-DD or YYYY-MM-DD>YYYY-MM-DD")]
    BadDateRange(String),
}

/// Errors from decoding a persisted line. Loaders drop the offending line
/// and keep going; a corrupt record must not take the whole store down.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("record has {0} fields, expected 5")]
    TruncatedLine(usize),

    #[error("invalid task id: '{0}'")]
    BadId(String),

    #[error("field is not valid encoded text: '{0}'")]
    BadText(String),

    #[error("stored date is invalid: '{0}'")]
    BadDate(String),

    #[error("unknown priority: '{0}'")]
    BadPriority(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no task with id {0}")]
    NotFound(u64),

    #[error("no tasks found for {0}")]
    NoTasksOnDate(NaiveDate),

    #[error("task store IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Combined error for service-level operations, which can fail either on
/// the input or at the store.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
