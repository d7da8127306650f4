//! Dashboard page: the signed-in user's profile and a sign-out control.
//! Redirects to `/login` when there is no session.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::routes::AppRoute;
use crate::state::dashboard::ProfileView;
use crate::state::session::{BrowserSessionStore, SessionStore};
use crate::util::auth::{GuardDecision, guard, install_unauth_redirect};
use crate::util::cancel::CancelToken;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardOutcome {
    /// No session; nothing was fetched.
    Redirect(AppRoute),
    /// The profile panel's final state.
    Rendered(ProfileView),
}

/// Guard the dashboard and load the current user's profile.
///
/// Without a session this returns a redirect before any request is made.
/// A failed fetch is rendered inline and leaves the session untouched.
/// Returns `None` if `cancel` fired while the request was in flight.
pub async fn load_dashboard<A, S, P>(
    api: &A,
    session: &S,
    cancel: &CancelToken,
    publish: P,
) -> Option<DashboardOutcome>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
    P: Fn(ProfileView),
{
    let token = match guard(session) {
        GuardDecision::Proceed(token) => token,
        GuardDecision::Redirect(route) => {
            log::info!("no session; redirecting to {}", route.path());
            return Some(DashboardOutcome::Redirect(route));
        }
    };
    publish(ProfileView::Loading);

    let result = api.fetch_current_user(&token).await;
    if cancel.is_cancelled() {
        log::debug!("dashboard unmounted; dropping profile response");
        return None;
    }
    if let Err(e) = &result {
        log::warn!("profile fetch failed: {e}");
    }

    let view = ProfileView::from_result(result);
    publish(view.clone());
    Some(DashboardOutcome::Rendered(view))
}

/// Sign out locally. No request is sent; the token is simply forgotten and
/// the page's unauthenticated redirect takes the user to `/login`.
pub fn logout<S: SessionStore + ?Sized>(session: &S) {
    session.clear_token();
    log::info!("signed out");
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    if let GuardDecision::Redirect(route) = guard(&BrowserSessionStore) {
        log::info!("no session; redirecting to {}", route.path());
        return view! { <Redirect path=route.path()/> }.into_any();
    }

    let config = expect_context::<ClientConfig>();
    let profile = RwSignal::new(ProfileView::Loading);
    let signed_in = RwSignal::new(true);
    install_unauth_redirect(signed_in, use_navigate());

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }

    let api = HttpAuthApi::new(config);
    leptos::task::spawn_local(async move {
        let outcome = load_dashboard(&api, &BrowserSessionStore, &cancel, |view| {
            let _ = profile.try_set(view);
        })
        .await;
        // Session cleared elsewhere between mount and load.
        if let Some(DashboardOutcome::Redirect(_)) = outcome {
            let _ = signed_in.try_set(false);
        }
    });

    let on_logout = move |_| {
        logout(&BrowserSessionStore);
        signed_in.set(false);
    };

    view! {
        <div class="dashboard-page" aria-busy=move || profile.with(ProfileView::is_loading).to_string()>
            <header class="dashboard-page__header">
                <h1>"Welcome!"</h1>
                <button class="btn btn--secondary" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            {move || match profile.get() {
                ProfileView::Loading => {
                    view! { <p class="dashboard-page__loading">"Loading profile..."</p> }.into_any()
                }
                ProfileView::Loaded(user) => {
                    view! {
                        <dl class="dashboard-page__profile">
                            <dt>"Name"</dt>
                            <dd>{user.name}</dd>
                            <dt>"Email"</dt>
                            <dd>{user.email}</dd>
                        </dl>
                    }
                        .into_any()
                }
                ProfileView::Failed(message) => {
                    view! { <p class="dashboard-page__error">{message}</p> }.into_any()
                }
            }}
        </div>
    }
    .into_any()
}
