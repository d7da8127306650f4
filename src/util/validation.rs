//! Client-side validation schema for the login and registration forms.
//!
//! DESIGN
//! ======
//! Each field has an ordered list of rules; validation reports only the first
//! violated rule per field. Rules are pure functions over the raw input text
//! so the same checks back both live (per-keystroke) feedback and the final
//! pre-submit pass.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one digit";
pub const PASSWORD_NEEDS_SYMBOL: &str = "Password must contain at least one special character";
pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters";
pub const NAME_TOO_LONG: &str = "Name must be at most 20 characters";
pub const CONFIRMATION_REQUIRED: &str = "Password confirmation is required";
pub const CONFIRMATION_MISMATCH: &str = "Passwords do not match";

pub const PASSWORD_MIN_LEN: usize = 8;
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 20;

/// Punctuation accepted by the "special character" password rule.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>`";

const EMAIL_LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";
const EMAIL_LOCAL_MAX_LEN: usize = 64;
const EMAIL_DOMAIN_MAX_LEN: usize = 253;
const EMAIL_LABEL_MAX_LEN: usize = 63;

// =============================================================================
// FIELDS
// =============================================================================

/// An input on one of the auth forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// Field name as used in backend request bodies and error maps.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
        }
    }

    /// Resolve a backend error key to a form field.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "password_confirmation" | "passwordConfirmation" => Some(Self::PasswordConfirmation),
            _ => None,
        }
    }
}

/// Per-field error messages. Holds at most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    ///
    /// Returns `true` if the message was stored.
    pub fn insert_first(&mut self, field: Field, message: impl Into<String>) -> bool {
        if self.0.contains_key(&field) {
            return false;
        }
        self.0.insert(field, message.into());
        true
    }

    /// Replace the message for `field`, or clear it when `message` is `None`.
    pub fn set(&mut self, field: Field, message: Option<String>) {
        match message {
            Some(m) => {
                self.0.insert(field, m);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// RULES
// =============================================================================

/// Validate an email address.
///
/// # Errors
///
/// Returns the message of the first violated rule.
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if !is_valid_email(value) {
        return Err(EMAIL_INVALID);
    }
    Ok(())
}

/// Validate password complexity.
///
/// # Errors
///
/// Returns the message of the first violated rule, checked in the order
/// length, uppercase, lowercase, digit, symbol.
pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PASSWORD_NEEDS_UPPERCASE);
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PASSWORD_NEEDS_LOWERCASE);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(PASSWORD_NEEDS_DIGIT);
    }
    if !value.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(PASSWORD_NEEDS_SYMBOL);
    }
    Ok(())
}

/// Validate a display name (registration only).
///
/// # Errors
///
/// Returns the message of the first violated rule.
pub fn validate_name(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(NAME_REQUIRED);
    }
    let len = value.chars().count();
    if len < NAME_MIN_LEN {
        return Err(NAME_TOO_SHORT);
    }
    if len > NAME_MAX_LEN {
        return Err(NAME_TOO_LONG);
    }
    Ok(())
}

/// Validate that the confirmation matches the password exactly.
///
/// # Errors
///
/// Returns the message of the first violated rule.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if confirmation.is_empty() {
        return Err(CONFIRMATION_REQUIRED);
    }
    if confirmation != password {
        return Err(CONFIRMATION_MISMATCH);
    }
    Ok(())
}

/// Validate a single field. `password` is only consulted for the
/// confirmation field.
///
/// # Errors
///
/// Returns the message of the first violated rule for `field`.
pub fn validate_field(field: Field, value: &str, password: &str) -> Result<(), &'static str> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
        Field::PasswordConfirmation => validate_confirmation(password, value),
    }
}

/// Validate every field in `fields`, looking values up through `value_of`.
///
/// # Errors
///
/// Returns the first violated rule's message for each failing field.
pub fn validate_fields<'a, F>(fields: &[Field], value_of: F) -> Result<(), FieldErrors>
where
    F: Fn(Field) -> &'a str,
{
    let password = value_of(Field::Password);
    let mut errors = FieldErrors::new();
    for &field in fields {
        if let Err(message) = validate_field(field, value_of(field), password) {
            errors.insert_first(field, message);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// =============================================================================
// EMAIL GRAMMAR
// =============================================================================

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !domain.contains('@') && is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= EMAIL_LOCAL_MAX_LEN
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || EMAIL_LOCAL_SPECIALS.contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.len() > EMAIL_DOMAIN_MAX_LEN {
        return false;
    }
    let labels = domain.split('.').collect::<Vec<_>>();
    if labels.len() < 2 || !labels.iter().all(|l| is_valid_label(l)) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= EMAIL_LABEL_MAX_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
