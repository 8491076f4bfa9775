//! Configuration for the credential-submission flow.
//!
//! Validation limits are policy, not business logic baked into the rules;
//! they live here together with the settings that bound a login attempt.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Complete flow configuration: validation policy plus session settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthFlowConfig {
    #[serde(flatten)]
    pub policy: PolicyConfig,

    #[serde(flatten)]
    pub session: SessionConfig,
}

/// Limits applied by the validator before any network call is made.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PolicyConfig {
    /// Minimum accepted password length, in characters.
    pub min_password_length: usize,

    /// Upper bound on email length.
    pub max_email_length: usize,

    /// Upper bound on password length.
    pub max_password_length: usize,
}

/// Settings governing a single authentication attempt.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// Timeout for one login call against the authentication service.
    pub login_timeout_secs: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            max_email_length: 254,
            max_password_length: 128,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_timeout_secs: 30,
        }
    }
}

impl AuthFlowConfig {
    /// Load configuration from credflow.toml (optional) with environment
    /// overrides (prefix `CREDFLOW`). Missing keys fall back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("credflow").required(false))
            .add_source(Environment::with_prefix("CREDFLOW"))
            .build()?;

        let config: AuthFlowConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.policy.min_password_length == 0 {
            return Err(ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.policy.max_password_length < self.policy.min_password_length {
            return Err(ConfigError::Message(
                "max_password_length must be at least min_password_length".into(),
            ));
        }

        if self.policy.max_email_length < 3 {
            return Err(ConfigError::Message(
                "max_email_length too small to hold any address".into(),
            ));
        }

        if self.session.login_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "login_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl SessionConfig {
    /// Get the login timeout as a Duration.
    pub fn login_timeout(&self) -> Duration {
        Duration::from_secs(self.login_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_validation() {
        let config = AuthFlowConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy.min_password_length, 6);
        assert_eq!(config.session.login_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_min_password_length_rejected() {
        let mut config = AuthFlowConfig::default();
        config.policy.min_password_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_password_bounds_rejected() {
        let mut config = AuthFlowConfig::default();
        config.policy.min_password_length = 10;
        config.policy.max_password_length = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = AuthFlowConfig::default();
        config.session.login_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
