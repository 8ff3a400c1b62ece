//! Pluggable token persistence.

use std::sync::{Arc, RwLock};

use crate::token::SessionToken;

/// Persistent storage for the session token.
///
/// The storefront keeps exactly one token; implementations replace it on
/// save and drop it on clear. The [`crate::Session`] is the only caller.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<SessionToken>;
    fn save(&self, token: &SessionToken);
    fn clear(&self);
}

impl<S> TokenStore for Arc<S>
where
    S: TokenStore + ?Sized,
{
    fn load(&self) -> Option<SessionToken> {
        (**self).load()
    }

    fn save(&self, token: &SessionToken) {
        (**self).save(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory token store for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    inner: RwLock<Option<SessionToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Option<SessionToken> {
        self.inner.read().ok()?.clone()
    }

    fn save(&self, token: &SessionToken) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(token.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_and_clear_drops() {
        let store = InMemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save(&SessionToken::new("first"));
        store.save(&SessionToken::new("second"));
        assert_eq!(store.load().unwrap().as_str(), "second");

        store.clear();
        assert!(store.load().is_none());
    }
}
