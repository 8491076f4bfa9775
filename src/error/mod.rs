//! Error handling
//!
//! Defines error types and handling for the credential flow.

pub mod handlers;
pub mod types;

pub use types::*;
