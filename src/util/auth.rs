//! Session façade shared through Leptos context, plus guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is the only owner of the session store. Pages read
//! `is_authenticated`, the login form commits tokens, the navbar logs out,
//! and the HTTP client expires the session on `401`. Route components apply
//! identical unauthenticated redirect behavior through [`guard_decision`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::Route;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;

/// What a protected route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect { to: Route, replace: bool },
}

impl GuardDecision {
    /// Navigation options for a redirect decision.
    pub fn navigate_options(self) -> NavigateOptions {
        match self {
            Self::Redirect { replace, .. } => NavigateOptions { replace, ..NavigateOptions::default() },
            Self::Render => NavigateOptions::default(),
        }
    }
}

/// Unauthenticated visitors are sent to `/login`, replacing history so back
/// navigation cannot re-enter the protected view.
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect { to: Route::Login, replace: true }
    }
}

/// Navigation options that replace the current history entry.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Copyable handle to the reactive session.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: StoredValue<SessionStore>,
}

impl AuthContext {
    /// Restore any persisted session from `store`.
    pub fn new(store: SessionStore) -> Self {
        let state = RwSignal::new(AuthState::restore(&store));
        Self { state, store: StoredValue::new(store) }
    }

    /// Token as persisted right now; used when building requests.
    ///
    /// Reads through the store so a login or logout in another tab is seen,
    /// and re-syncs the in-memory state when the two differ.
    pub fn token(&self) -> Option<String> {
        let stored = self.store.with_value(SessionStore::get);
        if self.state.try_with_untracked(|s| s.token != stored) == Some(true) {
            self.state.try_update(|s| s.sync(stored.clone()));
        }
        stored
    }

    /// Reactive read for guards and conditional rendering.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// Reactive guard decision for the current session.
    pub fn decision(&self) -> GuardDecision {
        self.state.with(guard_decision)
    }

    /// Persist `token` and go to the landing view.
    pub fn login<F>(&self, token: String, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        if let Some(route) = self.transition(|state, store| state.login(store, token)) {
            navigate(route.path(), NavigateOptions::default());
        }
    }

    /// Drop the session and go to `/login`.
    pub fn logout<F>(&self, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        if let Some(route) = self.transition(|state, store| state.logout(store)) {
            navigate(route.path(), replace_options());
        }
    }

    /// Drop a session the backend rejected. The guard performs the redirect.
    pub fn expire(&self) {
        if self.transition(|state, store| state.expire(store)) == Some(true) {
            log::warn!("session rejected by backend; signing out");
        }
    }

    fn transition<U>(&self, apply: impl FnOnce(&mut AuthState, &SessionStore) -> U) -> Option<U> {
        self.store
            .with_value(|store| self.state.try_update(|state| apply(state, store)))
    }
}

/// Create the session façade and provide it to descendants.
pub fn provide_auth(store: SessionStore) -> AuthContext {
    let auth = AuthContext::new(store);
    provide_context(auth);
    auth
}

/// Fetch the session façade.
///
/// # Panics
///
/// Panics when called outside the tree below [`provide_auth`]; that is a
/// wiring bug, not a logged-out session.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
