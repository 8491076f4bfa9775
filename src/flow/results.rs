//! Submission outcome types
//!
//! Defines the result structure returned by one submission attempt.

use crate::credentials::FieldErrors;

/// Result of one submission attempt, as seen by the presentation layer.
///
/// Field errors and the summary failure message are mutually exclusive:
/// `Invalid` means no login call was ever issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Authentication succeeded and the proceed signal fired.
    Navigated,
    /// Validation failed; the map holds one message per invalid field.
    Invalid(FieldErrors),
    /// The login attempt resolved to a failure with a summary message.
    Failed { message: String },
    /// The flow was not idle (attempt in flight, or already navigated).
    /// Nothing was validated or submitted.
    NotIdle,
}
