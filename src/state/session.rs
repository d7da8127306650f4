//! Session-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is the only piece of state that outlives a page load.
//! Controllers take a `SessionStore` by reference instead of reaching for
//! `localStorage` directly, so tests swap in [`MemorySessionStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Mutex;

use crate::net::types::SessionToken;

/// `localStorage` key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Storage for the single session token.
///
/// Presence of a token is the only authentication signal; nothing here checks
/// expiry or signatures.
pub trait SessionStore {
    fn get_token(&self) -> Option<SessionToken>;

    fn set_token(&self, token: &SessionToken);

    /// Remove the stored token. Clearing an empty store is a no-op.
    fn clear_token(&self);

    fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }
}

/// In-process store. Used by tests and as a stand-in outside the browser.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<SessionToken>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    #[must_use]
    pub fn with_token(token: SessionToken) -> Self {
        Self { token: Mutex::new(Some(token)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<SessionToken> {
        self.token.lock().map(|t| t.clone()).unwrap_or_default()
    }

    fn set_token(&self, token: &SessionToken) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.clone());
        }
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Store backed by the browser's `localStorage` under [`TOKEN_STORAGE_KEY`].
///
/// Without the `csr` feature there is no browser: reads return `None` and
/// writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserSessionStore {
    fn get_token(&self) -> Option<SessionToken> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            SessionToken::new(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set_token(&self, token: &SessionToken) {
        #[cfg(feature = "csr")]
        {
            let stored = local_storage().is_some_and(|s| s.set_item(TOKEN_STORAGE_KEY, token.as_str()).is_ok());
            if !stored {
                log::warn!("session token could not be persisted to localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}
