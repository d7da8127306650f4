//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page pairs an async controller (plain function over `AuthApi`,
//! `SessionStore` and, for forms, a `FormHandle`, tested without a DOM) with
//! the component that renders its state and performs the navigation it
//! returns.

pub mod dashboard;
pub mod login;
pub mod register;

#[cfg(test)]
pub(crate) mod test_helpers;

use crate::routes::AppRoute;
use crate::state::form::FormState;

/// Final result of a form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Idle state to render.
    pub state: FormState,
    /// Where to navigate, set only on success.
    pub redirect: Option<AppRoute>,
}
