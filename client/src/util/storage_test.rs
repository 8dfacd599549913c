use super::*;

#[test]
fn empty_store_has_no_session() {
    let store = MemoryStorage::default();
    assert_eq!(load_session(&store), None);
}

#[test]
fn blank_token_is_not_a_session() {
    let store = MemoryStorage::default();
    store.set("auth_token", "  ");
    store.set("auth_user", "admin");
    assert_eq!(load_session(&store), None);
}

#[test]
fn token_without_user_is_a_session() {
    let store = MemoryStorage::default();
    store.set("auth_token", "abc");
    let session = load_session(&store).unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user, None);
}

#[test]
fn save_then_load_and_clear() {
    let store = MemoryStorage::default();
    let session = AuthSession { token: "t1".to_owned(), user: Some("admin".to_owned()) };
    save_session(&store, &session);
    assert_eq!(store.get("auth_token").as_deref(), Some("t1"));
    assert_eq!(store.get("auth_user").as_deref(), Some("admin"));
    assert_eq!(load_session(&store), Some(session));

    clear_session(&store);
    assert_eq!(load_session(&store), None);
    assert_eq!(store.get("auth_user"), None);
}

#[test]
fn saving_a_session_without_user_drops_a_stale_user() {
    let store = MemoryStorage::default();
    store.set("auth_user", "previous");
    save_session(&store, &AuthSession { token: "t2".to_owned(), user: None });
    assert_eq!(store.get("auth_user"), None);
}

#[test]
fn browser_storage_outside_the_browser_reads_nothing() {
    let store = BrowserStorage;
    store.set("auth_token", "ignored");
    assert_eq!(load_session(&store), None);
}
