//! Route guard for pages that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages call [`guard`] before building any view. A missing token
//! is the only signal; the token is never inspected. Once rendered, a page
//! that can lose its session (sign-out, a failed reload) hands a `signed_in`
//! signal to [`install_unauth_redirect`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::SessionToken;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// No session; navigate away without rendering protected content.
    Redirect(AppRoute),
    /// Session present; continue with this token.
    Proceed(SessionToken),
}

/// Decide whether a protected page may render.
pub fn guard<S: SessionStore + ?Sized>(session: &S) -> GuardDecision {
    match session.get_token() {
        Some(token) => GuardDecision::Proceed(token),
        None => GuardDecision::Redirect(AppRoute::Login),
    }
}

/// Navigate to `/login` whenever `signed_in` turns false.
pub fn install_unauth_redirect<F>(signed_in: RwSignal<bool>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if !signed_in.get() {
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });
}
