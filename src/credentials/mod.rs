//! Credential data model
//!
//! Raw input, the validated credential pair, and per-field error reporting.

pub mod input;
pub mod store;

pub use input::{CredentialInput, Field, FieldErrors, ValidatedCredentials};
