//! Validation rules
//!
//! The schema is a table of field -> predicate -> message rows, checked in
//! order; the first failing rule per field is the one reported. Adding a
//! field or a rule means adding rows here, nothing else changes.

use crate::config::PolicyConfig;
use crate::credentials::{CredentialInput, Field, FieldErrors, ValidatedCredentials};

use super::email::is_valid_email;

struct Rule {
    field: Field,
    check: fn(&str, &PolicyConfig) -> bool,
    message: fn(&PolicyConfig) -> String,
}

const RULES: &[Rule] = &[
    Rule {
        field: Field::Email,
        check: |value, _| !value.trim().is_empty(),
        message: |_| "email required".to_string(),
    },
    Rule {
        field: Field::Email,
        check: |value, _| is_valid_email(value),
        message: |_| "invalid email format".to_string(),
    },
    Rule {
        field: Field::Email,
        check: |value, policy| value.len() <= policy.max_email_length,
        message: |policy| format!("email must be at most {} characters", policy.max_email_length),
    },
    Rule {
        field: Field::Password,
        check: |value, _| !value.is_empty(),
        message: |_| "password required".to_string(),
    },
    Rule {
        field: Field::Password,
        check: |value, policy| value.chars().count() >= policy.min_password_length,
        message: |policy| {
            format!(
                "password must be at least {} characters",
                policy.min_password_length
            )
        },
    },
    Rule {
        field: Field::Password,
        check: |value, policy| value.chars().count() <= policy.max_password_length,
        message: |policy| {
            format!(
                "password must be at most {} characters",
                policy.max_password_length
            )
        },
    },
    Rule {
        field: Field::Password,
        check: |value, _| !value.contains(['\r', '\n', '\0']),
        message: |_| "invalid password format".to_string(),
    },
];

/// Validates raw input against the policy, promoting it on success.
///
/// Accepted values are carried byte-for-byte; no trimming happens on the
/// way through. On failure the returned map holds one message per invalid
/// field.
pub fn validate(
    input: &CredentialInput,
    policy: &PolicyConfig,
) -> Result<ValidatedCredentials, FieldErrors> {
    let mut errors = FieldErrors::default();

    for rule in RULES {
        if !(rule.check)(input.field_value(rule.field), policy) {
            errors.insert(rule.field, (rule.message)(policy));
        }
    }

    if errors.is_empty() {
        Ok(ValidatedCredentials::new(
            input.email.clone(),
            input.password.clone(),
        ))
    } else {
        Err(errors)
    }
}
