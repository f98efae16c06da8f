use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStorage;

fn sample_user() -> User {
    User {
        id: 11,
        username: "admin".to_owned(),
        email: "admin@laundrymart.test".to_owned(),
        full_name: Some("Ada Admin".to_owned()),
        phone: Some("+1 555 0100".to_owned()),
        address: None,
        role: Role::Admin,
    }
}

#[test]
fn get_user_is_none_when_empty() {
    let storage = MemoryStorage::new();
    let session = SessionStore::new(&storage);
    assert!(session.get_user().is_none());
    assert!(session.token().is_none());
}

#[test]
fn set_user_round_trips() {
    let storage = MemoryStorage::new();
    let session = SessionStore::new(&storage);
    let user = sample_user();
    session.set_user(&user);
    assert_eq!(session.get_user(), Some(user));
}

#[test]
fn set_user_overwrites_previous_session() {
    let storage = MemoryStorage::new();
    let session = SessionStore::new(&storage);
    session.set_user(&sample_user());
    let mut next = sample_user();
    next.email = "new@laundrymart.test".to_owned();
    session.set_user(&next);
    assert_eq!(session.get_user(), Some(next));
}

#[test]
fn user_is_stored_as_json_under_single_key() {
    let storage = MemoryStorage::new();
    let session = SessionStore::new(&storage);
    session.set_user(&sample_user());
    let raw = storage.get(USER_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["username"], "admin");
    assert_eq!(value["fullName"], "Ada Admin");
}

#[test]
fn corrupt_user_json_reads_as_logged_out() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, "{not json");
    let session = SessionStore::new(&storage);
    assert!(session.get_user().is_none());
}

#[test]
fn empty_token_reads_as_none() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "");
    assert!(SessionStore::new(&storage).token().is_none());
}

#[test]
fn begin_persists_token_and_user() {
    let storage = MemoryStorage::new();
    let session = SessionStore::new(&storage);
    session.begin("tok-1", &sample_user());
    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert_eq!(session.get_user(), Some(sample_user()));
}

#[test]
fn logout_clears_user_and_token() {
    let storage = MemoryStorage::new();
    let session = SessionStore::new(&storage);
    session.begin("tok-1", &sample_user());
    session.logout();
    assert!(session.get_user().is_none());
    assert!(session.token().is_none());
    assert!(storage.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_session_is_empty_outside_browser() {
    assert!(browser().get_user().is_none());
    logout();
}
