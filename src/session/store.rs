use std::sync::Arc;

use dashmap::DashMap;
use jiff::{Span, Timestamp};
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::models::Role;

/// Length of generated session tokens.
const TOKEN_LENGTH: usize = 48;

/// Identity recorded for an authenticated session.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
    expires_at: Timestamp,
}

/// In-memory session store keyed by opaque tokens.
///
/// DashMap is Arc-backed internally but is wrapped in an Arc here so the
/// store can be cloned into the application state and middleware cheaply.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, SessionData>>,
    ttl_seconds: i64,
}

impl SessionStore {
    pub fn new(ttl_seconds: i64) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl_seconds,
        }
    }

    /// Creates a session for the given identity and returns its token.
    pub fn create(&self, user_id: i32, username: &str, role: Role) -> String {
        let token = generate_token();
        let expires_at = Timestamp::now()
            .checked_add(Span::new().seconds(self.ttl_seconds))
            .unwrap_or(Timestamp::MAX);

        self.sessions.insert(
            token.clone(),
            SessionData {
                user_id,
                username: username.to_string(),
                role,
                expires_at,
            },
        );
        token
    }

    /// Looks up a session, evicting it if expired.
    pub fn get(&self, token: &str) -> Option<SessionData> {
        let expired = match self.sessions.get(token) {
            Some(session) if session.expires_at > Timestamp::now() => {
                return Some(session.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.sessions.remove(token);
        }
        None
    }

    /// Removes a session. Returns whether one existed.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Number of live entries, counting not-yet-evicted expired sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let store = SessionStore::new(3600);
        let token = store.create(1, "admin", Role::Admin);

        let session = store.get(&token).expect("session should exist");
        assert_eq!(session.user_id, 1);
        assert_eq!(session.username, "admin");
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn test_unknown_token() {
        let store = SessionStore::new(3600);
        assert!(store.get("no-such-token").is_none());
    }

    #[test]
    fn test_remove() {
        let store = SessionStore::new(3600);
        let token = store.create(7, "manager", Role::FleetManager);

        assert!(store.remove(&token));
        assert!(store.get(&token).is_none());
        assert!(!store.remove(&token));
    }

    #[test]
    fn test_expired_session_is_evicted() {
        let store = SessionStore::new(-1);
        let token = store.create(1, "admin", Role::Admin);

        assert!(store.get(&token).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = SessionStore::new(3600);
        let a = store.create(1, "a", Role::Admin);
        let b = store.create(1, "a", Role::Admin);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
