//! Error types
//!
//! Defines the failure modes of the authentication service boundary.

use std::fmt;

/// Authentication service errors
#[derive(Debug)]
pub enum AuthServiceError {
    /// The service answered and declined the credentials; the string is a
    /// display-ready reason.
    Rejected(String),
    /// The service could not complete the attempt (network fault, outage,
    /// malformed response). Never shown to the user verbatim.
    Unavailable(String),
}

impl fmt::Display for AuthServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthServiceError::Rejected(msg) => write!(f, "Authentication rejected: {}", msg),
            AuthServiceError::Unavailable(msg) => write!(f, "Service unavailable: {}", msg),
        }
    }
}

impl std::error::Error for AuthServiceError {}
