//! Registration page. A successful sign-up sends the user to the login page;
//! there is no automatic sign-in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::SubmitOutcome;
use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::routes::AppRoute;
use crate::state::form::{FormHandle, FormKind, FormState};
use crate::util::cancel::CancelToken;
use crate::util::validation::Field;

/// Validate and submit the registration form.
///
/// Same lifecycle as [`super::login::submit_login`], minus the session write:
/// success redirects to the login page.
pub async fn submit_registration<A, F>(api: &A, form: &F, cancel: &CancelToken) -> Option<SubmitOutcome>
where
    A: AuthApi + ?Sized,
    F: FormHandle + ?Sized,
{
    let submitting = match form.current()?.begin_submit() {
        Ok(state) => state,
        Err(rejected) => {
            form.replace(rejected.clone());
            return Some(SubmitOutcome { state: rejected, redirect: None });
        }
    };
    form.replace(submitting.clone());

    let result = api.register(&submitting.values.registration_request()).await;
    if cancel.is_cancelled() {
        log::debug!("register page unmounted; dropping response");
        return None;
    }
    let live = form.current()?;

    let outcome = match result {
        Ok(()) => {
            log::info!("registration succeeded");
            SubmitOutcome { state: live.submit_succeeded(), redirect: Some(AppRoute::Login) }
        }
        Err(e) => {
            log::warn!("registration failed: {e}");
            SubmitOutcome { state: live.submit_failed(&e), redirect: None }
        }
    };
    form.replace(outcome.state.clone());
    Some(outcome)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(FormKind::Register));
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = HttpAuthApi::new(config.clone());
        let navigate = navigate.clone();
        let cancel = cancel.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_registration(&api, &form, &cancel).await;
            if let Some(route) = outcome.and_then(|o| o.redirect) {
                navigate(route.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <Show when=move || form.with(|s| s.banner.is_some())>
                    <p class="auth-card__banner">{move || form.with(|s| s.banner.clone().unwrap_or_default())}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField form=form field=Field::Name label="Name"/>
                    <FormField form=form field=Field::Email label="Email" input_type="email"/>
                    <FormField form=form field=Field::Password label="Password" secret=true/>
                    <FormField form=form field=Field::PasswordConfirmation label="Confirm password" secret=true/>
                    <button
                        class="auth-form__submit"
                        type="submit"
                        disabled=move || form.with(FormState::is_submitting)
                    >
                        {move || if form.with(FormState::is_submitting) { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=AppRoute::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
