//! Credflow demo - Entry Point
//!
//! Wires the submission flow to the demo credential store and walks the
//! invalid-input, rejection, and success paths.

use log::{info, warn};

use credflow::auth::StaticCredentialService;
use credflow::config::AuthFlowConfig;
use credflow::credentials::CredentialInput;
use credflow::flow::{LoginFlow, Navigator};

struct LogNavigator;

impl Navigator for LogNavigator {
    fn proceed(&mut self) {
        info!("Proceed signal fired: navigating to the authenticated landing destination");
    }
}

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AuthFlowConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Falling back to default configuration: {}", e);
            AuthFlowConfig::default()
        }
    };

    info!(
        "Starting credflow demo (min password length {}, login timeout {:?})",
        config.policy.min_password_length,
        config.session.login_timeout()
    );

    let mut flow = LoginFlow::new(StaticCredentialService, LogNavigator, &config);

    let attempts = [
        CredentialInput::new("not-an-email", "alice123"),
        CredentialInput::new("alice@example.com", "wrong-password"),
        CredentialInput::new("alice@example.com", "alice123"),
    ];

    for input in attempts {
        let email = input.email.clone();
        let outcome = flow.submit(input).await;
        info!("Submission for {}: {:?}", email, outcome);
    }
}
