//! Session state
//!
//! Explicit per-form session state shared between the authenticator and the
//! presentation layer. `loading` is the backpressure signal: true for
//! exactly the extent of one in-flight login call. Each form gets its own
//! session, so independent forms and tests never cross-contaminate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared state for one credential form's authentication session.
#[derive(Debug, Default)]
pub struct AuthSession {
    loading: AtomicBool,
}

impl AuthSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Whether a login call is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Marks the session in-flight. Returns `None` when a call is already
    /// running, which is how one-in-flight is enforced.
    pub(crate) fn begin_attempt(self: &Arc<Self>) -> Option<LoadingGuard> {
        self.loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then(|| LoadingGuard {
                session: Arc::clone(self),
            })
    }
}

/// Clears `loading` when dropped, so the flag resets on every exit path out
/// of a login call, including panics and faults.
pub(crate) struct LoadingGuard {
    session: Arc<AuthSession>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.session.loading.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_attempt_sets_loading() {
        let session = AuthSession::new();
        assert!(!session.is_loading());

        let guard = session.begin_attempt().unwrap();
        assert!(session.is_loading());

        drop(guard);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_second_attempt_rejected_while_in_flight() {
        let session = AuthSession::new();
        let _guard = session.begin_attempt().unwrap();
        assert!(session.begin_attempt().is_none());
    }

    #[test]
    fn test_new_attempt_allowed_after_guard_drop() {
        let session = AuthSession::new();
        drop(session.begin_attempt().unwrap());
        assert!(session.begin_attempt().is_some());
    }
}
