use std::fmt::Display;

pub use calendar_utils::Error as DateError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    Date(DateError),
    /// An operation required both ends of the selection to be picked.
    IncompleteRange,
}

impl From<DateError> for Error {
    fn from(err: DateError) -> Self {
        Self::Date(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(err) => write!(f, "{err}"),
            Self::IncompleteRange => write!(f, "the selected range is not complete"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Date(err) => Some(err),
            Self::IncompleteRange => None,
        }
    }
}
