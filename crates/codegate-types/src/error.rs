use std::fmt;

/// Result type for codegate-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Duration is not one of the offered validity periods
    InvalidDuration(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDuration(days) => {
                write!(f, "invalid duration: {} days (expected 5, 15 or 30)", days)
            }
        }
    }
}

impl std::error::Error for Error {}
