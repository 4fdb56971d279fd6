use std::fmt;

/// Errors that can be returned by k-d tree operations.
///
/// Internal structural inconsistencies (a dangling node key, a parent whose
/// child slots do not contain the node that named it) are bugs rather than
/// user errors and panic instead of surfacing here.
#[derive(Debug, PartialEq)]
pub enum KdError {
    /// No entry matched the queried point, or a range query was issued
    /// against an empty tree.
    NotFound { msg: &'static str },
}

/// Result alias used by the fallible tree operations.
pub type Result<T> = core::result::Result<T, KdError>;

impl fmt::Display for KdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdError::NotFound { msg } => write!(f, "not found: {}", msg),
        }
    }
}

impl std::error::Error for KdError {}
