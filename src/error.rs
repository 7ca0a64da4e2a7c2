// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The container is not in a state that allows the operation
    /// (e.g. spawning an undo toast without an undo handler).
    InvalidState(String),
    /// A setter or spawn argument was out of range.
    InvalidArgument(String),
    Io(String),
    Config(String),
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] for a duration that is not
    /// strictly positive and finite.
    pub(crate) fn non_positive(name: &str, value: f64) -> Self {
        Error::InvalidArgument(format!("{name} must be a positive number of seconds, got {value}"))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState(e) => write!(f, "Invalid State: {}", e),
            Error::InvalidArgument(e) => write!(f, "Invalid Argument: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
