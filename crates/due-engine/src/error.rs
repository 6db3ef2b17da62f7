//! Error types for due-engine operations.
//!
//! Parsing a due-date expression never fails; these errors come from the
//! surrounding helpers (options, stored due dates).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DueError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid week start: {0}")]
    InvalidWeekStart(String),
}

pub type Result<T> = std::result::Result<T, DueError>;
