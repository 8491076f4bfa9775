//! Authentication result types
//!
//! Defines the result returned by a login attempt.

/// Outcome of a single login attempt.
///
/// Every call to `Authenticator::login` resolves to exactly one variant;
/// there is no pending or mixed state once the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    /// Credentials accepted. The caller decides what happens next; the
    /// authenticator itself never navigates.
    Success,
    /// Attempt resolved without authenticating; `message` is display-ready.
    Failure { message: String },
}

impl AuthResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthResult::Success)
    }

    /// The summary message, when the attempt failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            AuthResult::Success => None,
            AuthResult::Failure { message } => Some(message),
        }
    }
}
