//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and the HTTP client to coordinate login redirects
//! and bearer-token injection. Transitions write through to the
//! [`SessionStore`] and return the route the caller should land on.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::Route;
use crate::state::session::SessionStore;

/// In-memory mirror of the persisted session token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Pick up a session persisted by an earlier page load.
    pub fn restore(store: &SessionStore) -> Self {
        Self { token: store.get() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Commit a token obtained by the login form.
    pub fn login(&mut self, store: &SessionStore, token: String) -> Route {
        store.set(&token);
        self.token = Some(token);
        Route::Dashboard
    }

    pub fn logout(&mut self, store: &SessionStore) -> Route {
        store.clear();
        self.token = None;
        Route::Login
    }

    /// Adopt the token currently persisted in the store, which another tab
    /// may have changed. Returns `true` when the in-memory copy changed.
    pub fn sync(&mut self, stored: Option<String>) -> bool {
        if self.token == stored {
            return false;
        }
        self.token = stored;
        true
    }

    /// Tear down a session the backend rejected.
    ///
    /// Returns `true` when a live session was dropped.
    pub fn expire(&mut self, store: &SessionStore) -> bool {
        store.clear();
        self.token.take().is_some()
    }
}
