//! Session state and the injectable session store.

use std::sync::RwLock;

use crate::tokens::{AccessToken, RefreshToken};
use crate::types::BaseUrl;

/// The client-side session: the token pair plus the configured backend
/// base URL.
///
/// The access token being present is the sole signal that the client
/// considers itself authenticated; server-side validity is not locally
/// verifiable.
#[derive(Clone, Debug)]
pub struct Session {
    pub access_token: Option<AccessToken>,
    pub refresh_token: Option<RefreshToken>,
    pub base_url: BaseUrl,
}

impl Session {
    /// An unauthenticated session against the given backend.
    pub fn anonymous(base_url: BaseUrl) -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            base_url,
        }
    }

    /// A session restored from a persisted token pair.
    pub fn with_tokens(
        base_url: BaseUrl,
        access_token: AccessToken,
        refresh_token: Option<RefreshToken>,
    ) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token,
            base_url,
        }
    }

    /// Whether the client currently holds an access token.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Process-wide custody of the current session.
///
/// The request executor re-reads the store at every use instead of holding
/// a snapshot, since the refresh protocol may rotate tokens mid-call.
/// Token pair updates through [`SessionStore::set`] are all-or-nothing:
/// both fields change together, never an old access token paired with a
/// new refresh token.
pub trait SessionStore: Send + Sync {
    /// Returns the current session.
    fn get(&self) -> Session;

    /// Replace the current session.
    fn set(&self, session: Session);

    /// Drop both tokens. The base URL is configuration and survives.
    fn clear(&self);
}

/// In-memory session store, for library embedding and tests.
///
/// Lock scopes are short and never held across await points.
pub struct MemoryStore {
    inner: RwLock<Session>,
}

impl MemoryStore {
    /// Create an unauthenticated store for the given backend.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            inner: RwLock::new(Session::anonymous(base_url)),
        }
    }

    /// Create a store seeded with an existing session.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(session),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Session {
        self.inner.read().unwrap().clone()
    }

    fn set(&self, session: Session) {
        *self.inner.write().unwrap() = session;
    }

    fn clear(&self) {
        let mut session = self.inner.write().unwrap();
        session.access_token = None;
        session.refresh_token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseUrl {
        BaseUrl::new("http://localhost:8000").unwrap()
    }

    #[test]
    fn anonymous_store_has_no_tokens() {
        let store = MemoryStore::new(base());
        let session = store.get();
        assert!(!session.is_authenticated());
        assert!(session.refresh_token.is_none());
    }

    #[test]
    fn set_replaces_the_token_pair() {
        let store = MemoryStore::new(base());
        store.set(Session::with_tokens(
            base(),
            AccessToken::new("access"),
            Some(RefreshToken::new("refresh")),
        ));

        let session = store.get();
        assert!(session.is_authenticated());
        assert_eq!(session.access_token.unwrap().as_str(), "access");
        assert_eq!(session.refresh_token.unwrap().as_str(), "refresh");
    }

    #[test]
    fn clear_drops_tokens_but_keeps_base_url() {
        let store = MemoryStore::new(base());
        store.set(Session::with_tokens(
            base(),
            AccessToken::new("access"),
            Some(RefreshToken::new("refresh")),
        ));

        store.clear();

        let session = store.get();
        assert!(session.access_token.is_none());
        assert!(session.refresh_token.is_none());
        assert_eq!(session.base_url, base());
    }

    #[test]
    fn session_debug_redacts_tokens() {
        let session = Session::with_tokens(
            base(),
            AccessToken::new("super-secret-access"),
            Some(RefreshToken::new("super-secret-refresh")),
        );
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
    }
}
