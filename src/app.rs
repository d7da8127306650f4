//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::{ClientConfig, ConfigError};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::routes::AppRoute;

/// Root application component.
///
/// Provides the client config to every page and sets up client-side routing.
/// `/` has no screen of its own and redirects to the login page.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Login.path()/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Rendered instead of [`App`] when the backend URL is not configured.
#[component]
pub fn ConfigErrorPage(error: ConfigError) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Configuration error"</h1>
            <p>{error.to_string()}</p>
        </div>
    }
}
