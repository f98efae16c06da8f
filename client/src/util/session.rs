//! Persisted browser session: the logged-in user and their auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read the session to decide what to render; login and profile
//! updates overwrite it; logout clears it. There is exactly one session per
//! browser profile and no expiry or refresh.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Storage key holding the JSON-serialized `User`.
pub const USER_KEY: &str = "user";
/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Session persistence over any `KeyValueStore`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The persisted user, or `None` when logged out or the stored JSON is unreadable.
    pub fn get_user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Overwrite the persisted user.
    pub fn set_user(&self, user: &User) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        self.storage.set(USER_KEY, &raw);
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    /// Persist a fresh login.
    pub fn begin(&self, token: &str, user: &User) {
        self.set_token(token);
        self.set_user(user);
    }

    /// Clear the persisted user and auth token.
    pub fn logout(&self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(TOKEN_KEY);
    }
}

/// Session store backed by `localStorage`.
pub fn browser() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}

/// Clear the browser session.
pub fn logout() {
    browser().logout();
}
