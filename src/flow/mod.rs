//! Submission flow
//!
//! The composition root: sequences validation, the login call, and routing
//! of the outcome to navigation or surfaced errors.

pub mod handler;
pub mod results;
pub mod state;

pub use handler::{LoginFlow, Navigator};
pub use results::SubmitOutcome;
pub use state::SubmissionState;
