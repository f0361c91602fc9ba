use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_token() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_reads_persisted_token() {
    let store = SessionStore::in_memory();
    store.set("jwt-1");
    let state = AuthState::restore(&store);
    assert_eq!(state.token.as_deref(), Some("jwt-1"));
    assert!(state.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_persists_token_and_lands_on_dashboard() {
    let store = SessionStore::in_memory();
    let mut state = AuthState::default();
    let route = state.login(&store, "jwt-2".to_owned());
    assert_eq!(route, Route::Dashboard);
    assert!(state.is_authenticated());
    assert_eq!(store.get().as_deref(), Some("jwt-2"));
}

#[test]
fn logout_clears_token_and_lands_on_login() {
    let store = SessionStore::in_memory();
    let mut state = AuthState::default();
    state.login(&store, "jwt-3".to_owned());
    let route = state.logout(&store);
    assert_eq!(route, Route::Login);
    assert!(!state.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn expire_reports_whether_a_session_was_dropped() {
    let store = SessionStore::in_memory();
    let mut state = AuthState::default();
    assert!(!state.expire(&store));

    state.login(&store, "jwt-4".to_owned());
    assert!(state.expire(&store));
    assert!(!state.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn login_logout_login_round_trip_restores_session() {
    let store = SessionStore::in_memory();
    let mut state = AuthState::restore(&store);
    state.login(&store, "first".to_owned());
    state.logout(&store);
    state.login(&store, "second".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("second"));
    assert_eq!(AuthState::restore(&store), state);
}

#[test]
fn sync_adopts_token_written_elsewhere() {
    let mut state = AuthState { token: None };
    assert!(state.sync(Some("other-tab".to_owned())));
    assert_eq!(state.token.as_deref(), Some("other-tab"));
    assert!(!state.sync(Some("other-tab".to_owned())));
    assert!(state.sync(None));
    assert!(!state.is_authenticated());
}
