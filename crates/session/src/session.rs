//! The session: single owner of the bearer token.

use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::store::TokenStore;
use crate::token::SessionToken;

/// Process-wide authenticated session.
///
/// Owns the current bearer token for its whole lifecycle: set on login,
/// cleared on logout. Every API client receives a shared reference at
/// construction time and reads the token through [`Session::token`]; no
/// component reads the backing store directly.
///
/// Absence of a token means every authenticated operation must fail locally
/// with `RemoteError::Unauthenticated` before any request is built.
pub struct Session {
    current: RwLock<Option<SessionToken>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Create a session backed by `store`, resuming a previously persisted
    /// token if one exists.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let current = store.load();
        if current.is_some() {
            debug!("resumed persisted session token");
        }
        Self {
            current: RwLock::new(current),
            store,
        }
    }

    /// Install a freshly issued token (login).
    pub fn authenticate(&self, token: SessionToken) {
        self.store.save(&token);
        if let Ok(mut slot) = self.current.write() {
            *slot = Some(token);
        }
        info!("session authenticated");
    }

    /// Drop the token (logout). Idempotent.
    pub fn clear(&self) {
        self.store.clear();
        if let Ok(mut slot) = self.current.write() {
            *slot = None;
        }
        info!("session cleared");
    }

    /// Current token, if authenticated.
    pub fn token(&self) -> Option<SessionToken> {
        self.current.read().ok()?.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
