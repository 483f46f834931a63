//! User management service implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

/// Partial update applied to an existing user
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New login email
    pub email: Option<String>,
    /// New plaintext password, hashed before storage
    pub password: Option<String>,
}

/// Service for user account management
pub struct UserService<U>
where
    U: UserRepository,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Credential hasher applied before any password reaches storage
    password_hasher: Arc<PasswordHasher>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user management service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Backing store for account records
    /// * `password_hasher` - Service for bcrypt password hashing
    pub fn new(user_repository: Arc<U>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Register a new user account
    ///
    /// New accounts start with the `user` permission and no todos.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `email` - Login email, unique across the system
    /// * `password` - Plaintext password, hashed before storage
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created account
    /// * `Err(DomainError)` - Duplicate email or storage failure
    pub async fn create_user(&self, name: &str, email: &str, password: &str) -> DomainResult<User> {
        // Step 1: Reject duplicate login emails
        if self.user_repository.exists_by_email(email).await? {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        // Step 2: Hash the password before it reaches storage
        let password_hash = self.password_hasher.hash(password)?;

        // Step 3: Persist the new account
        let user = User::new(name.to_string(), email.to_string(), password_hash);
        let created = self.user_repository.create(user).await?;

        tracing::info!(
            user_id = %created.id,
            event = "user_created",
            "User account created"
        );

        Ok(created)
    }

    /// List all registered users in insertion order
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.list().await
    }

    /// Fetch a single user by id
    ///
    /// # Arguments
    ///
    /// * `id` - The user's UUID
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The account
    /// * `Err(DomainError)` - `AuthError::UserNotFound` when absent
    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    /// Apply a partial update to an existing user
    ///
    /// This method:
    /// 1. Loads the account, failing when it does not exist
    /// 2. Applies the email change, keeping emails unique
    /// 3. Re-hashes on password change
    /// 4. Persists the updated record
    ///
    /// # Arguments
    ///
    /// * `id` - The user's UUID
    /// * `update` - Fields to change
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The updated account
    /// * `Err(DomainError)` - Missing account, duplicate email, or storage failure
    pub async fn update_user(&self, id: Uuid, update: UserUpdate) -> DomainResult<User> {
        // Step 1: The account must exist
        let mut user = self.get_user(id).await?;

        // Step 2: Apply the email change, keeping emails unique
        if let Some(email) = update.email {
            if email != user.email && self.user_repository.exists_by_email(&email).await? {
                return Err(DomainError::Auth(AuthError::UserAlreadyExists));
            }
            user.email = email;
        }

        // Step 3: Re-hash on password change
        if let Some(password) = update.password {
            user.password_hash = self.password_hasher.hash(&password)?;
        }

        user.updated_at = Utc::now();

        // Step 4: Persist the updated record
        let updated = self.user_repository.update(user).await?;

        tracing::info!(
            user_id = %updated.id,
            event = "user_updated",
            "User account updated"
        );

        Ok(updated)
    }

    /// Delete a user account
    ///
    /// # Arguments
    ///
    /// * `id` - The user's UUID
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The account was deleted
    /// * `Err(DomainError)` - `AuthError::UserNotFound` when absent
    pub async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        let deleted = self.user_repository.delete(id).await?;

        if !deleted {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }

        tracing::info!(
            user_id = %id,
            event = "user_deleted",
            "User account deleted"
        );

        Ok(())
    }
}
