//! Client-side route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Navigable screens. `/` is not a screen of its own; the router redirects
/// it to [`AppRoute::Login`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Register,
    Login,
    Dashboard,
}

impl AppRoute {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}
