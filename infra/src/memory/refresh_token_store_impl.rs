//! In-memory implementation of the RefreshTokenStore trait.
//!
//! The store is the process-wide record of refresh tokens that may still
//! be redeemed for new access tokens. It holds the raw token strings in
//! an insertion-ordered `Vec`; a restart empties it, which invalidates
//! every outstanding session at once.

use async_trait::async_trait;
use tokio::sync::RwLock;

use te_core::errors::DomainError;
use te_core::repositories::RefreshTokenStore;

/// In-memory implementation of RefreshTokenStore
pub struct InMemoryRefreshTokenStore {
    /// Insertion-ordered raw refresh token strings
    tokens: RwLock<Vec<String>>,
}

impl InMemoryRefreshTokenStore {
    /// Create a new, empty refresh token store
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryRefreshTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn register(&self, token: &str) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.push(token.to_string());
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.iter().any(|t| t == token))
    }

    async fn revoke(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        match tokens.iter().position(|t| t == token) {
            Some(index) => {
                tokens.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.len())
    }
}
