//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::SubmitOutcome;
use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::routes::AppRoute;
use crate::state::form::{FormHandle, FormKind, FormState};
use crate::state::session::{BrowserSessionStore, SessionStore};
use crate::util::cancel::CancelToken;
use crate::util::validation::Field;

/// Validate and submit the login form.
///
/// Writes the `Submitting` state before the request. The final idle state is
/// derived from the form as it is when the response arrives, so input typed
/// during the request is kept. On success the token is stored and the
/// outcome redirects to the dashboard. Returns `None` without touching the
/// session if `cancel` fired or the form went away mid-request.
pub async fn submit_login<A, S, F>(api: &A, session: &S, form: &F, cancel: &CancelToken) -> Option<SubmitOutcome>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
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

    let result = api.login(&submitting.values.credentials()).await;
    if cancel.is_cancelled() {
        log::debug!("login page unmounted; dropping response");
        return None;
    }
    let live = form.current()?;

    let outcome = match result {
        Ok(token) => {
            session.set_token(&token);
            log::info!("login succeeded");
            SubmitOutcome { state: live.submit_succeeded(), redirect: Some(AppRoute::Dashboard) }
        }
        Err(e) => {
            log::warn!("login failed: {e}");
            SubmitOutcome { state: live.submit_failed(&e), redirect: None }
        }
    };
    form.replace(outcome.state.clone());
    Some(outcome)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(FormKind::Login));
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
            let outcome = submit_login(&api, &BrowserSessionStore, &form, &cancel).await;
            if let Some(route) = outcome.and_then(|o| o.redirect) {
                navigate(route.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <Show when=move || form.with(|s| s.banner.is_some())>
                    <p class="auth-card__banner">{move || form.with(|s| s.banner.clone().unwrap_or_default())}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField form=form field=Field::Email label="Email" input_type="email"/>
                    <FormField form=form field=Field::Password label="Password" secret=true/>
                    <button
                        class="auth-form__submit"
                        type="submit"
                        disabled=move || form.with(FormState::is_submitting)
                    >
                        {move || if form.with(FormState::is_submitting) { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account? "
                    <a href=AppRoute::Register.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
}
