//! Submission handler
//!
//! Owns the per-form state and error surfaces, and sequences one attempt:
//! clear previous errors, validate, login, then navigate or surface the
//! failure. No algorithmic content of its own beyond that routing.

use log::{info, warn};
use std::sync::Arc;

use crate::auth::{AuthResult, AuthService, AuthSession, Authenticator};
use crate::config::{AuthFlowConfig, PolicyConfig};
use crate::credentials::{CredentialInput, FieldErrors};
use crate::flow::results::SubmitOutcome;
use crate::flow::state::SubmissionState;
use crate::validation::validate;

/// Consumes the single "proceed" signal fired on successful authentication.
/// The target is the authenticated landing destination; no parameters cross
/// this boundary.
pub trait Navigator {
    fn proceed(&mut self);
}

/// One credential form's submission flow.
pub struct LoginFlow<S: AuthService, N: Navigator> {
    authenticator: Authenticator<S>,
    navigator: N,
    policy: PolicyConfig,
    state: SubmissionState,
    field_errors: Option<FieldErrors>,
    failure_message: Option<String>,
}

impl<S: AuthService, N: Navigator> LoginFlow<S, N> {
    pub fn new(service: S, navigator: N, config: &AuthFlowConfig) -> Self {
        Self {
            authenticator: Authenticator::new(service, &config.session),
            navigator,
            policy: config.policy.clone(),
            state: SubmissionState::Idle,
            field_errors: None,
            failure_message: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Backpressure signal for the presentation layer: true while a login
    /// call is in flight, which is when the submit control must be disabled.
    pub fn is_loading(&self) -> bool {
        self.authenticator.is_loading()
    }

    /// Handle to the shared session state.
    pub fn session(&self) -> Arc<AuthSession> {
        self.authenticator.session()
    }

    /// Field errors surfaced by the last attempt, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.field_errors.as_ref()
    }

    /// Summary failure message surfaced by the last attempt, if any.
    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    /// Runs one submission attempt end to end.
    ///
    /// Invalid input never reaches the service. A successful login fires the
    /// proceed signal exactly once. Submissions while the flow is not idle
    /// are ignored and reported as such.
    pub async fn submit(&mut self, input: CredentialInput) -> SubmitOutcome {
        if !self.state.is_idle() {
            warn!("Submission ignored: flow is {:?}", self.state);
            return SubmitOutcome::NotIdle;
        }

        // Previous surfaces clear before anything else runs; exactly one of
        // them may be set again by this attempt.
        self.field_errors = None;
        self.failure_message = None;

        self.state = SubmissionState::Validating;
        let credentials = match validate(&input, &self.policy) {
            Ok(credentials) => credentials,
            Err(errors) => {
                info!(
                    "Submission rejected by validation: {} field error(s)",
                    errors.len()
                );
                self.field_errors = Some(errors.clone());
                self.state = SubmissionState::Idle;
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.state = SubmissionState::Submitting;
        match self.authenticator.login(credentials).await {
            AuthResult::Success => {
                self.state = SubmissionState::Navigated;
                self.navigator.proceed();
                SubmitOutcome::Navigated
            }
            AuthResult::Failure { message } => {
                self.failure_message = Some(message.clone());
                self.state = SubmissionState::Idle;
                SubmitOutcome::Failed { message }
            }
        }
    }
}
