//! Credential validation
//!
//! Pure, schema-style validation of raw credential input against the
//! configured policy. Deterministic and side-effect free: the same input
//! always yields the same result, and nothing reaches the network from here.

pub mod email;
pub mod rules;

pub use rules::validate;
