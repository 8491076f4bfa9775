//! Email syntax checking
//!
//! Hand-written syntactic pass covering the common mailbox shape. Not an
//! RFC 5321 parser; anything this rejects would be rejected downstream too.

/// Returns true when `value` looks like a plausible email address.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs an interior dot: "a.b" is fine, ".b" and "a." are not.
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return false;
    }

    true
}
