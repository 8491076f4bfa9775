//! Demo credential storage
//!
//! In-memory email/password store backing the demo authentication service -
//! in production this would be a proper identity backend.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Static credential store keyed by email address.
pub(crate) static CREDENTIALS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut creds = HashMap::new();
        creds.insert("alice@example.com", "alice123");
        creds.insert("bob@example.com", "bob1234");
        creds.insert("admin@example.com", "admin123");
        creds
    });
