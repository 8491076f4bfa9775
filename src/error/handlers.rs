//! Error handlers
//!
//! Centralizes logging of service failures and the mapping from a service
//! error to the single summary message surfaced to the user.

use crate::error::types::AuthServiceError;
use log::error;

/// Generic text shown when the service faulted rather than cleanly rejected.
pub const SERVICE_FAULT_MESSAGE: &str = "authentication service unavailable";

/// Log a service-level failure.
pub fn handle_service_error(err: &AuthServiceError) {
    error!("Authentication service error: {}", err);
}

/// Convert a service error into the display-ready summary message.
///
/// Clean rejections pass their reason through; faults collapse to a generic
/// message so internals never leak to the user.
pub fn summary_message(err: &AuthServiceError) -> String {
    match err {
        AuthServiceError::Rejected(msg) => msg.clone(),
        AuthServiceError::Unavailable(_) => SERVICE_FAULT_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_passes_through() {
        let err = AuthServiceError::Rejected("invalid credentials".to_string());
        assert_eq!(summary_message(&err), "invalid credentials");
    }

    #[test]
    fn test_fault_collapses_to_generic_message() {
        let err = AuthServiceError::Unavailable("connection reset by peer".to_string());
        assert_eq!(summary_message(&err), SERVICE_FAULT_MESSAGE);
    }
}
