use std::fmt;

use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// A month index which doesn't match any month of the year.
    InvalidMonth(u32),
    /// Date arithmetic went past the dates supported by chrono.
    OutOfRange,
    /// A day count was requested for a range which ends before it starts.
    ReversedRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(month) => write!(f, "invalid month `{month}`"),
            Self::OutOfRange => write!(f, "date is out of the supported range"),
            Self::ReversedRange { start, end } => {
                write!(f, "range ends ({end}) before it starts ({start})")
            }
        }
    }
}

impl std::error::Error for Error {}
