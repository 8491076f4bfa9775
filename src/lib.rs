pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod flow;
pub mod validation;

pub use flow::LoginFlow;
