//! Authentication
//!
//! The async authenticator, its session state, the service boundary, and
//! login result types.

pub mod authenticator;
pub mod results;
pub mod service;
pub mod session;

pub use authenticator::Authenticator;
pub use results::AuthResult;
pub use service::{AuthService, StaticCredentialService};
pub use session::AuthSession;
