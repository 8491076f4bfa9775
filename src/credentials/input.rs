//! Credential input types
//!
//! `CredentialInput` is whatever the presentation layer collected, untrusted.
//! `ValidatedCredentials` is the same pair after it passed the schema; only
//! the validator can construct it, so holding one means the pair is safe to
//! hand to the authentication service.

use std::collections::HashMap;
use std::fmt;

/// Raw, untrusted credential pair as submitted by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialInput {
    pub email: String,
    pub password: String,
}

impl CredentialInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub(crate) fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }
}

/// Named input fields of the credential form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-scoped validation messages, at most one per field.
///
/// Inserting a second message for a field keeps the first, so rules earlier
/// in the schema win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: HashMap<Field, String>,
}

impl FieldErrors {
    pub(crate) fn insert(&mut self, field: Field, message: String) {
        self.errors.entry(field).or_insert(message);
    }

    /// Message for the given field, if it failed validation.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over failed fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Credential pair that passed the validation schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCredentials {
    email: String,
    password: String,
}

impl ValidatedCredentials {
    /// Only the validator promotes input to validated credentials.
    pub(crate) fn new(email: String, password: String) -> Self {
        Self { email, password }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_keep_first_message_per_field() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Email, "email required".to_string());
        errors.insert(Field::Email, "invalid email format".to_string());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("email required"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Email.as_str(), "email");
        assert_eq!(Field::Password.as_str(), "password");
    }
}
