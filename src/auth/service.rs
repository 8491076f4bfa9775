//! Authentication service boundary
//!
//! The flow treats credential transport and storage as an opaque
//! collaborator behind this trait: it accepts a validated pair, cleanly
//! rejects it with a display-ready reason, or faults.

use async_trait::async_trait;

use crate::credentials::ValidatedCredentials;
use crate::credentials::store::CREDENTIALS;
use crate::error::AuthServiceError;

/// An authentication endpoint.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Attempt to authenticate an already-validated credential pair.
    ///
    /// `Ok(())` means the credentials were accepted. `Rejected` carries the
    /// user-facing reason; `Unavailable` is any fault short of a clean
    /// answer.
    async fn authenticate(
        &self,
        credentials: &ValidatedCredentials,
    ) -> Result<(), AuthServiceError>;
}

/// Demo service backed by the static in-memory credential store.
#[derive(Debug, Default, Clone)]
pub struct StaticCredentialService;

#[async_trait]
impl AuthService for StaticCredentialService {
    async fn authenticate(
        &self,
        credentials: &ValidatedCredentials,
    ) -> Result<(), AuthServiceError> {
        match CREDENTIALS.get(credentials.email()) {
            Some(stored) if *stored == credentials.password() => Ok(()),
            // Unknown account and wrong password answer identically so the
            // response does not reveal which emails exist.
            Some(_) | None => Err(AuthServiceError::Rejected(
                "invalid credentials".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;
    use crate::credentials::CredentialInput;
    use crate::validation::validate;

    fn creds(email: &str, password: &str) -> ValidatedCredentials {
        validate(
            &CredentialInput::new(email, password),
            &PolicyConfig::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_known_pair_accepted() {
        let service = StaticCredentialService;
        let result = service.authenticate(&creds("alice@example.com", "alice123")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_answer_identically() {
        let service = StaticCredentialService;

        let wrong = service
            .authenticate(&creds("alice@example.com", "wrong-1"))
            .await
            .unwrap_err();
        let unknown = service
            .authenticate(&creds("nobody@example.com", "wrong-1"))
            .await
            .unwrap_err();

        assert_eq!(wrong.to_string(), unknown.to_string());
    }
}
