//! Render state for the dashboard's profile panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::ApiError;
use crate::net::types::UserProfile;

/// Profile panel state. Only lives as long as the dashboard view; every mount
/// starts again from `Loading`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileView {
    #[default]
    Loading,
    Loaded(UserProfile),
    /// Fetch failed. The session is kept; reloading retries.
    Failed(String),
}

impl ProfileView {
    #[must_use]
    pub fn from_result(result: Result<UserProfile, ApiError>) -> Self {
        match result {
            Ok(user) => Self::Loaded(user),
            Err(e) => Self::Failed(format!("Could not load your profile: {e}")),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
