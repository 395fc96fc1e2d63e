//! Storage for the tokens handed back by a successful registration

use parking_lot::RwLock;
use std::fmt;

/// Access and refresh tokens issued by the backend
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

/// Where the client keeps tokens after a successful registration
pub trait TokenStore: Send + Sync {
    fn store(&self, tokens: TokenPair);

    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    fn clear(&self);
}

/// Process-local token store
#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn store(&self, tokens: TokenPair) {
        *self.tokens.write() = Some(tokens);
    }

    fn access_token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|t| t.access.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|t| t.refresh.clone())
    }

    fn clear(&self) {
        *self.tokens.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_clear() {
        let store = InMemoryTokenStore::new();
        assert!(store.access_token().is_none());

        store.store(TokenPair {
            access: "a-1".to_string(),
            refresh: "r-1".to_string(),
        });
        assert_eq!(store.access_token().as_deref(), Some("a-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("r-1"));

        store.clear();
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn test_tokens_are_redacted_in_debug() {
        let tokens = TokenPair {
            access: "secret-access".to_string(),
            refresh: "secret-refresh".to_string(),
        };
        assert!(!format!("{tokens:?}").contains("secret"));
    }
}
