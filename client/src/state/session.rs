//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` context. Hydrated from the persisted
//! session store on mount; route guards and the navbar render from it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::session::SessionStore;
use crate::util::storage::KeyValueStore;

/// Authenticated user plus whether the persisted session has been read yet.
///
/// `loading` starts `true` so SSR output and the first hydrated frame agree
/// before `localStorage` is consulted.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Snapshot the persisted session.
    pub fn from_store<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        Self { user: store.get_user(), loading: false }
    }
}
