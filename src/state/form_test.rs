use std::collections::BTreeMap;

use super::*;
use crate::util::validation::{
    CONFIRMATION_MISMATCH, CONFIRMATION_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED, PASSWORD_NEEDS_SYMBOL,
    PASSWORD_REQUIRED,
};

fn filled_login() -> FormState {
    FormState::new(FormKind::Login)
        .with_input(Field::Email, "a@b.com")
        .with_input(Field::Password, "Abcdef1!")
}

fn filled_register() -> FormState {
    FormState::new(FormKind::Register)
        .with_input(Field::Name, "Ann")
        .with_input(Field::Email, "ann@x.com")
        .with_input(Field::Password, "Abcdef1!")
        .with_input(Field::PasswordConfirmation, "Abcdef1!")
}

fn api_fields(pairs: &[(&str, &str)]) -> ApiError {
    ApiError::Fields(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<BTreeMap<_, _>>(),
    )
}

// =============================================================
// live validation
// =============================================================

#[test]
fn new_form_is_idle_and_clean() {
    let state = FormState::new(FormKind::Register);
    assert_eq!(state.phase, FormPhase::Idle);
    assert!(state.errors.is_empty());
    assert!(state.banner.is_none());
}

#[test]
fn input_change_validates_only_that_field() {
    let state = FormState::new(FormKind::Login).with_input(Field::Email, "nope");
    assert_eq!(state.error(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(state.error(Field::Password), None);

    let state = state.with_input(Field::Email, "a@b.com");
    assert_eq!(state.error(Field::Email), None);
}

#[test]
fn password_change_revalidates_filled_confirmation() {
    let state = filled_register().with_input(Field::Password, "Abcdef1!x");
    assert_eq!(state.error(Field::PasswordConfirmation), Some(CONFIRMATION_MISMATCH));

    let state = state.with_input(Field::Password, "Abcdef1!");
    assert_eq!(state.error(Field::PasswordConfirmation), None);
}

#[test]
fn password_change_leaves_empty_confirmation_alone() {
    let state = FormState::new(FormKind::Register).with_input(Field::Password, "Abcdef1!");
    assert_eq!(state.error(Field::PasswordConfirmation), None);
}

#[test]
fn with_input_does_not_mutate_previous_state() {
    let before = FormState::new(FormKind::Login);
    let _after = before.with_input(Field::Email, "x");
    assert_eq!(before, FormState::new(FormKind::Login));
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn begin_submit_valid_login_enters_submitting() {
    let submitting = filled_login().begin_submit().unwrap();
    assert!(submitting.is_submitting());
    assert!(submitting.errors.is_empty());
}

#[test]
fn begin_submit_empty_login_reports_required_fields() {
    let rejected = FormState::new(FormKind::Login).begin_submit().unwrap_err();
    assert_eq!(rejected.phase, FormPhase::Idle);
    assert_eq!(rejected.error(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(rejected.error(Field::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(rejected.error(Field::Name), None);
}

#[test]
fn begin_submit_register_checks_name_and_confirmation() {
    let rejected = FormState::new(FormKind::Register)
        .with_input(Field::Email, "ann@x.com")
        .with_input(Field::Password, "Abcdef12")
        .begin_submit()
        .unwrap_err();
    assert_eq!(rejected.error(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(rejected.error(Field::Password), Some(PASSWORD_NEEDS_SYMBOL));
    assert_eq!(rejected.error(Field::PasswordConfirmation), Some(CONFIRMATION_REQUIRED));
}

#[test]
fn begin_submit_mismatch_fails_on_confirmation_even_with_valid_password() {
    let rejected = filled_register()
        .with_input(Field::PasswordConfirmation, "Abcdef1?")
        .begin_submit()
        .unwrap_err();
    assert_eq!(rejected.error(Field::PasswordConfirmation), Some(CONFIRMATION_MISMATCH));
    for field in [Field::Name, Field::Email, Field::Password] {
        assert_eq!(rejected.error(field), None, "{field:?}");
    }
}

#[test]
fn begin_submit_clears_previous_banner() {
    let failed = filled_login().submit_failed(&ApiError::Network("offline".to_owned()));
    assert!(failed.banner.is_some());
    let submitting = failed.begin_submit().unwrap();
    assert!(submitting.banner.is_none());
}

#[test]
fn begin_submit_while_submitting_is_rejected_unchanged() {
    let submitting = filled_login().begin_submit().unwrap();
    let again = submitting.begin_submit().unwrap_err();
    assert_eq!(again, submitting);
}

// =============================================================
// completion
// =============================================================

#[test]
fn submit_succeeded_returns_to_idle_and_drops_passwords() {
    let done = filled_register().begin_submit().unwrap().submit_succeeded();
    assert_eq!(done.phase, FormPhase::Idle);
    assert!(done.values.password.is_empty());
    assert!(done.values.password_confirmation.is_empty());
    assert_eq!(done.values.email, "ann@x.com");
}

#[test]
fn submit_failed_maps_field_errors_onto_inputs() {
    let failed = filled_login()
        .begin_submit()
        .unwrap()
        .submit_failed(&api_fields(&[("email", "not found")]));
    assert_eq!(failed.phase, FormPhase::Idle);
    assert_eq!(failed.error(Field::Email), Some("not found"));
    assert!(failed.banner.is_none());
}

#[test]
fn submit_failed_maps_confirmation_key_on_register() {
    let failed = filled_register().submit_failed(&api_fields(&[("password_confirmation", "mismatch")]));
    assert_eq!(failed.error(Field::PasswordConfirmation), Some("mismatch"));
}

#[test]
fn submit_failed_unknown_fields_go_to_banner() {
    let failed = filled_login().submit_failed(&api_fields(&[("name", "taken"), ("captcha", "required")]));
    assert!(failed.errors.is_empty());
    assert_eq!(failed.banner.as_deref(), Some("Login failed: captcha: required; name: taken"));
}

#[test]
fn submit_failed_message_becomes_prefixed_banner() {
    let failed = filled_register().submit_failed(&ApiError::Message { status: 500, message: "boom".to_owned() });
    assert!(failed.errors.is_empty());
    assert_eq!(failed.banner.as_deref(), Some("Registration failed: boom"));
}

#[test]
fn credentials_and_request_copy_values() {
    let login = filled_login();
    assert_eq!(login.values.credentials(), Credentials { email: "a@b.com".to_owned(), password: "Abcdef1!".to_owned() });

    let req = filled_register().values.registration_request();
    assert_eq!(req.name, "Ann");
    assert_eq!(req.password_confirmation, "Abcdef1!");
}

#[test]
fn form_values_debug_hides_passwords() {
    let dbg = format!("{:?}", filled_login().values);
    assert!(!dbg.contains("Abcdef1!"));
}
