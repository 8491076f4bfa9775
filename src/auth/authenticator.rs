//! Authenticator
//!
//! Drives a single login attempt against the authentication service. Owns
//! the in-flight state and resolves every call to exactly one `AuthResult`:
//! a clean rejection surfaces its message, a fault collapses to a generic
//! one, and a service that never answers is cut off by the login timeout.

use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::auth::results::AuthResult;
use crate::auth::service::AuthService;
use crate::auth::session::AuthSession;
use crate::config::SessionConfig;
use crate::credentials::ValidatedCredentials;
use crate::error::handlers;

/// Message surfaced when a second login is attempted while one is in flight.
pub const IN_FLIGHT_MESSAGE: &str = "a sign-in attempt is already in progress";

/// Message surfaced when the service does not answer within the timeout.
pub const TIMEOUT_MESSAGE: &str = "authentication timed out";

/// Runs login attempts for one session.
pub struct Authenticator<S: AuthService> {
    service: Arc<S>,
    session: Arc<AuthSession>,
    login_timeout: Duration,
}

impl<S: AuthService> Clone for Authenticator<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            session: Arc::clone(&self.session),
            login_timeout: self.login_timeout,
        }
    }
}

impl<S: AuthService> Authenticator<S> {
    pub fn new(service: S, config: &SessionConfig) -> Self {
        Self {
            service: Arc::new(service),
            session: AuthSession::new(),
            login_timeout: config.login_timeout(),
        }
    }

    /// Handle to the shared session state, for observing `loading` while a
    /// call is in flight.
    pub fn session(&self) -> Arc<AuthSession> {
        Arc::clone(&self.session)
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// Runs one authentication attempt.
    ///
    /// Credentials are assumed validated; nothing is re-checked here. The
    /// session's `loading` flag is true for the extent of the call and reset
    /// on every exit path. A call issued while another is in flight resolves
    /// to `Failure` without touching the service.
    pub async fn login(&self, credentials: ValidatedCredentials) -> AuthResult {
        let Some(_guard) = self.session.begin_attempt() else {
            warn!(
                "Rejected login for {}: another attempt is in flight",
                credentials.email()
            );
            return AuthResult::Failure {
                message: IN_FLIGHT_MESSAGE.to_string(),
            };
        };

        info!("Login attempt for {}", credentials.email());

        match timeout(self.login_timeout, self.service.authenticate(&credentials)).await {
            Ok(Ok(())) => {
                info!("Login succeeded for {}", credentials.email());
                AuthResult::Success
            }
            Ok(Err(err)) => {
                handlers::handle_service_error(&err);
                AuthResult::Failure {
                    message: handlers::summary_message(&err),
                }
            }
            Err(_) => {
                warn!(
                    "Login for {} timed out after {:?}",
                    credentials.email(),
                    self.login_timeout
                );
                AuthResult::Failure {
                    message: TIMEOUT_MESSAGE.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;
    use crate::credentials::CredentialInput;
    use crate::error::AuthServiceError;
    use crate::validation::validate;
    use async_trait::async_trait;

    struct AcceptAll;

    #[async_trait]
    impl AuthService for AcceptAll {
        async fn authenticate(
            &self,
            _credentials: &ValidatedCredentials,
        ) -> Result<(), AuthServiceError> {
            Ok(())
        }
    }

    struct RejectAll;

    #[async_trait]
    impl AuthService for RejectAll {
        async fn authenticate(
            &self,
            _credentials: &ValidatedCredentials,
        ) -> Result<(), AuthServiceError> {
            Err(AuthServiceError::Rejected("invalid credentials".to_string()))
        }
    }

    struct FaultAll;

    #[async_trait]
    impl AuthService for FaultAll {
        async fn authenticate(
            &self,
            _credentials: &ValidatedCredentials,
        ) -> Result<(), AuthServiceError> {
            Err(AuthServiceError::Unavailable("connection reset".to_string()))
        }
    }

    fn creds() -> ValidatedCredentials {
        validate(
            &CredentialInput::new("a@b.com", "secret1"),
            &PolicyConfig::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_accepted_attempt_resolves_to_success() {
        let auth = Authenticator::new(AcceptAll, &SessionConfig::default());
        assert_eq!(auth.login(creds()).await, AuthResult::Success);
        assert!(!auth.is_loading());
    }

    #[tokio::test]
    async fn test_rejection_carries_service_message() {
        let auth = Authenticator::new(RejectAll, &SessionConfig::default());
        let result = auth.login(creds()).await;
        assert_eq!(result.failure_message(), Some("invalid credentials"));
        assert!(!auth.is_loading());
    }

    #[tokio::test]
    async fn test_fault_resolves_to_generic_failure() {
        let auth = Authenticator::new(FaultAll, &SessionConfig::default());
        let result = auth.login(creds()).await;
        assert_eq!(
            result.failure_message(),
            Some(handlers::SERVICE_FAULT_MESSAGE)
        );
        assert!(!auth.is_loading());
    }
}
