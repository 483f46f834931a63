//! Refresh token store trait defining the interface for session tracking.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Store trait for currently-valid refresh tokens
///
/// The store holds an insertion-ordered sequence of raw refresh token
/// strings. A token is registered on login and removed on logout; only
/// the refresh flow consults the store, access tokens are never checked
/// against it. Every operation is total: absence is reported through the
/// return value, never as an error.
///
/// # Semantics
/// - `register` appends without deduplication; each login is an
///   independent session, so the same account on several devices holds
///   several entries.
/// - `revoke` removes the first exact match and reports whether one
///   existed, which makes logout idempotent.
/// - Entries for expired tokens are inert. Signature verification fails
///   before the membership check, and the whole store resets on process
///   restart.
///
/// # Example
/// ```no_run
/// # use te_core::repositories::RefreshTokenStore;
/// # async fn example(store: &impl RefreshTokenStore) -> Result<(), Box<dyn std::error::Error>> {
/// store.register("signed.refresh.token").await?;
/// assert!(store.contains("signed.refresh.token").await?);
///
/// store.revoke("signed.refresh.token").await?;
/// assert!(!store.contains("signed.refresh.token").await?);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Append a refresh token to the store
    async fn register(&self, token: &str) -> Result<(), DomainError>;

    /// Check whether a token is currently registered
    async fn contains(&self, token: &str) -> Result<bool, DomainError>;

    /// Remove the first exact match of the token
    ///
    /// # Returns
    /// * `Ok(true)` - A matching entry was removed
    /// * `Ok(false)` - No matching entry existed
    async fn revoke(&self, token: &str) -> Result<bool, DomainError>;

    /// Number of currently registered tokens
    async fn count(&self) -> Result<usize, DomainError>;
}
