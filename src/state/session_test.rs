use super::*;

#[test]
fn empty_store_has_no_token() {
    let store = SessionStore::in_memory();
    assert_eq!(store.get(), None);
}

#[test]
fn set_then_get_returns_token() {
    let store = SessionStore::in_memory();
    store.set("jwt-1");
    assert_eq!(store.get().as_deref(), Some("jwt-1"));
}

#[test]
fn clear_removes_token() {
    let store = SessionStore::in_memory();
    store.set("jwt-1");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn token_survives_new_store_over_same_backend() {
    let backend: Arc<dyn TokenStorage> = Arc::new(MemoryStorage::default());
    SessionStore::new(backend.clone()).set("jwt-reload");

    let reloaded = SessionStore::new(backend.clone());
    assert_eq!(reloaded.get().as_deref(), Some("jwt-reload"));
    assert_eq!(backend.read(TOKEN_STORAGE_KEY).as_deref(), Some("jwt-reload"));
}

#[test]
fn empty_stored_value_counts_as_logged_out() {
    let store = SessionStore::in_memory();
    store.set("");
    assert_eq!(store.get(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_noop_without_csr() {
    let store = SessionStore::browser();
    store.set("jwt");
    assert_eq!(store.get(), None);
    store.clear();
}

#[test]
fn debug_does_not_leak_token() {
    let store = SessionStore::in_memory();
    store.set("secret-jwt");
    let rendered = format!("{store:?}");
    assert!(!rendered.contains("secret-jwt"));
    assert!(rendered.contains("has_token: true"));
}
