//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    /// A time range was empty, reversed, or reached outside `[0, 1440]`.
    #[error("Invalid time range: [{start}, {end})")]
    InvalidRange { start: i64, end: i64 },
}

pub type Result<T> = std::result::Result<T, MeetingError>;
