//! User repository trait behind every account read and write.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for account lookup and persistence
///
/// Lookup is email-first: login resolves credentials by email and
/// uniqueness is enforced at creation time, while token refresh and the
/// management endpoints re-read records by id.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their login email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The matching account
    /// * `Ok(None)` - No account registered under that email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The matching account
    /// * `Ok(None)` - Unknown id
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// List all users in insertion order
    ///
    /// # Returns
    /// * `Ok(Vec<User>)` - All registered users
    /// * `Err(DomainError)` - Storage error occurred
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a new account record
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace a stored user with the given record
    ///
    /// # Returns
    /// * `Ok(User)` - The record as stored
    /// * `Err(DomainError)` - Update failed (e.g., user not found)
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Remove a user by id
    ///
    /// # Returns
    /// * `Ok(true)` - The user existed and is gone
    /// * `Ok(false)` - Nothing stored under that id
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check whether an email is already registered
    ///
    /// # Returns
    /// * `Ok(true)` - The email is taken
    /// * `Ok(false)` - The email is free
    /// * `Err(DomainError)` - Storage error occurred
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
