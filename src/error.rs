use std::fmt;

/// Errors reported by [`OrderedList`] and [`Cursor`] operations.
///
/// Both kinds are recoverable: a public operation that fails leaves the list
/// untouched.
///
/// [`OrderedList`]: crate::OrderedList
/// [`Cursor`]: crate::list::cursor::Cursor
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The index lies outside the range accepted by the operation.
    IndexOutOfBounds { index: usize },
    /// A cursor was asked to do something it has no target for.
    InvalidOperation {
        operation: &'static str,
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn out_of_bounds(index: usize) -> Self {
        Error::IndexOutOfBounds { index }
    }

    pub(crate) fn invalid(operation: &'static str, reason: &'static str) -> Self {
        Error::InvalidOperation { operation, reason }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index } => {
                write!(f, "index {} out of bounds in list", index)
            }
            Error::InvalidOperation { operation, reason } => {
                write!(f, "invalid operation `{}`: {}", operation, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
