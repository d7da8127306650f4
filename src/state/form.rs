//! View state for the login and registration forms.
//!
//! DESIGN
//! ======
//! `FormState` is an immutable record; every event (keystroke, submit,
//! response) goes through a transition method that returns the next record.
//! Pages keep the current record in a signal and render from it, so the
//! whole submission lifecycle is testable without a DOM.
//!
//! ```text
//! Idle --begin_submit(valid)--> Submitting --submit_succeeded--> Idle (+redirect)
//!  ^  \--begin_submit(invalid)--> Idle with field errors       |
//!  |                                                           v
//!  +------------------------------------------- submit_failed --+
//! ```

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;

use leptos::prelude::{GetUntracked, RwSignal, Set};

use crate::net::error::ApiError;
use crate::net::types::{Credentials, RegistrationRequest};
use crate::util::validation::{Field, FieldErrors, validate_field, validate_fields};

const LOGIN_FIELDS: &[Field] = &[Field::Email, Field::Password];
const REGISTER_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Password, Field::PasswordConfirmation];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    /// Inputs shown on this form, in display order.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Login => LOGIN_FIELDS,
            Self::Register => REGISTER_FIELDS,
        }
    }

    #[must_use]
    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Prefix for form-level error banners.
    #[must_use]
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    /// A request is in flight; the submit control is disabled.
    Submitting,
}

/// Raw input text. Fields a form does not show stay empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::PasswordConfirmation => self.password_confirmation = value,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }

    #[must_use]
    pub fn registration_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        }
    }

    fn clear_secrets(&mut self) {
        self.password.clear();
        self.password_confirmation.clear();
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Complete render state of one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub kind: FormKind,
    pub values: FormValues,
    pub errors: FieldErrors,
    /// Form-level error not attributable to a single input.
    pub banner: Option<String>,
    pub phase: FormPhase,
}

impl FormState {
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        Self { kind, values: FormValues::default(), errors: FieldErrors::new(), banner: None, phase: FormPhase::Idle }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Apply an input change and re-validate the edited field.
    ///
    /// Editing the password also re-validates a non-empty confirmation so a
    /// stale "Passwords do not match" clears as soon as they agree.
    #[must_use]
    pub fn with_input(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.values.set(field, value.into());
        next.revalidate(field);
        if field == Field::Password
            && self.kind.has_field(Field::PasswordConfirmation)
            && !next.values.password_confirmation.is_empty()
        {
            next.revalidate(Field::PasswordConfirmation);
        }
        next
    }

    /// Run the full schema before a submission.
    ///
    /// # Errors
    ///
    /// Returns the state to render instead of submitting: the current state
    /// unchanged if a submission is already in flight, otherwise an idle
    /// state carrying every field's first error.
    pub fn begin_submit(&self) -> Result<Self, Self> {
        if self.is_submitting() {
            return Err(self.clone());
        }
        match validate_fields(self.kind.fields(), |f| self.values.get(f)) {
            Ok(()) => Ok(Self { errors: FieldErrors::new(), banner: None, phase: FormPhase::Submitting, ..self.clone() }),
            Err(errors) => Err(Self { errors, banner: None, phase: FormPhase::Idle, ..self.clone() }),
        }
    }

    /// Back to idle after a successful submission. Passwords are dropped.
    #[must_use]
    pub fn submit_succeeded(&self) -> Self {
        let mut next = Self { errors: FieldErrors::new(), banner: None, phase: FormPhase::Idle, ..self.clone() };
        next.values.clear_secrets();
        next
    }

    /// Back to idle with the backend's errors mapped onto the form.
    ///
    /// Field errors for inputs this form shows land under those inputs; any
    /// other field keys, and all non-field failures, become the banner.
    #[must_use]
    pub fn submit_failed(&self, error: &ApiError) -> Self {
        let mut next = Self { errors: FieldErrors::new(), banner: None, phase: FormPhase::Idle, ..self.clone() };
        let prefix = self.kind.failure_prefix();
        match error {
            ApiError::Fields(fields) => {
                let mut unmatched = Vec::new();
                for (name, message) in fields {
                    match Field::from_wire(name).filter(|f| self.kind.has_field(*f)) {
                        Some(field) => {
                            next.errors.insert_first(field, message.clone());
                        }
                        None => unmatched.push(format!("{name}: {message}")),
                    }
                }
                if !unmatched.is_empty() {
                    next.banner = Some(format!("{prefix}: {}", unmatched.join("; ")));
                }
            }
            other => next.banner = Some(format!("{prefix}: {other}")),
        }
        next
    }

    fn revalidate(&mut self, field: Field) {
        let message = validate_field(field, self.values.get(field), &self.values.password)
            .err()
            .map(str::to_owned);
        self.errors.set(field, message);
    }
}

/// Where a page keeps its live [`FormState`].
///
/// Controllers read through this after every await, so edits made while a
/// request is in flight survive the response.
pub trait FormHandle {
    /// Current state, or `None` once the form has been torn down.
    fn current(&self) -> Option<FormState>;

    fn replace(&self, next: FormState);
}

impl FormHandle for RwSignal<FormState> {
    fn current(&self) -> Option<FormState> {
        self.try_get_untracked()
    }

    fn replace(&self, next: FormState) {
        let _ = self.try_set(next);
    }
}
