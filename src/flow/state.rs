//! Submission state machine
//!
//! Per-attempt lifecycle:
//!
//! ```text
//! Idle -> Validating -> (invalid) -> Idle
//! Idle -> Validating -> Submitting -> Navigated
//! Idle -> Validating -> Submitting -> (failed) -> Idle
//! ```
//!
//! A new attempt may only begin from `Idle`. `Navigated` is terminal for a
//! flow instance; a form that signalled proceed does not accept another
//! submission.

/// State of the submission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Ready for a new attempt. Invalid and failed attempts land back here
    /// with their errors surfaced.
    #[default]
    Idle,
    /// Running the validator.
    Validating,
    /// Login call in flight.
    Submitting,
    /// Authentication succeeded and the proceed signal fired.
    Navigated,
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_navigated(&self) -> bool {
        matches!(self, SubmissionState::Navigated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert!(SubmissionState::default().is_idle());
        assert!(!SubmissionState::default().is_navigated());
    }
}
