// cowl-core - Error types for the cowl runtime
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for cowl operations.

use std::fmt;

/// Result type for cowl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during collection operations.
///
/// All of these indicate programmer errors at the call site, never transient
/// conditions; nothing in the runtime retries or recovers internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Type error - an operation received a container kind it does not support
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Malformed argument list (e.g. an uneven key/value pair list)
    IllegalArgument {
        name: &'static str,
        message: String,
    },
    /// Index out of bounds
    IndexOutOfBounds { index: i64, length: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
            Error::IllegalArgument { name, message } => {
                write!(f, "Illegal argument to '{}': {}", name, message)
            }
            Error::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for collection of length {}",
                    index, length
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error naming the offending operation.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create an illegal-argument error naming the offending operation.
    pub fn illegal_argument(name: &'static str, message: impl Into<String>) -> Self {
        Error::IllegalArgument {
            name,
            message: message.into(),
        }
    }
}
