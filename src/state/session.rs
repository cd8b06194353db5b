//! Logged-in session state and its storage round-trip.
//!
//! A session is all-or-nothing: the store only reports a session when the
//! login flag, token, and email are all present. Logout wipes storage
//! wholesale, which also resets theme and click history on logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::KeyValueBackend;

pub const KEY_IS_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_TOKEN: &str = "token";
pub const KEY_EMAIL: &str = "userEmail";
pub const KEY_USERNAME: &str = "username";

/// Identity of the signed-in visitor. Present only after a successful auth
/// call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub username: Option<String>,
}

/// Typed persistence service for [`Session`].
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load the stored session, if one is fully present.
    ///
    /// Partial writes (flag without token, etc.) read back as logged out.
    pub fn load(&self) -> Option<Session> {
        if self.backend.get(KEY_IS_LOGGED_IN).as_deref() != Some("true") {
            return None;
        }
        let token = self.backend.get(KEY_TOKEN)?;
        let email = self.backend.get(KEY_EMAIL)?;
        Some(Session {
            token,
            email,
            username: self.backend.get(KEY_USERNAME),
        })
    }

    /// Persist a freshly authenticated session.
    pub fn save(&self, session: &Session) {
        self.backend.set(KEY_IS_LOGGED_IN, "true");
        self.backend.set(KEY_TOKEN, &session.token);
        self.backend.set(KEY_EMAIL, &session.email);
        match &session.username {
            Some(username) => self.backend.set(KEY_USERNAME, username),
            None => self.backend.remove(KEY_USERNAME),
        }
    }

    /// Log out: clear every stored key, not just the session fields.
    pub fn clear(&self) {
        self.backend.clear_all();
    }
}
