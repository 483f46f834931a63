//! In-memory implementation of the UserRepository trait.
//!
//! User records live in an insertion-ordered `Vec` guarded by a
//! `tokio::sync::RwLock`. Uniqueness of login emails is enforced here so
//! no caller can bypass it.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use te_core::domain::entities::user::User;
use te_core::errors::{AuthError, DomainError};
use te_core::repositories::UserRepository;

/// In-memory implementation of UserRepository
pub struct InMemoryUserRepository {
    /// Insertion-ordered user records
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a new, empty user repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(DomainError::Auth(AuthError::UserNotFound)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(email: &str) -> User {
        User::new("tester".to_string(), email.to_string(), "hash".to_string())
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(test_user("find@example.com")).await.unwrap();

        let found = repo.find_by_email("find@example.com").await.unwrap();
        assert_eq!(found, Some(user));

        let missing = repo.find_by_email("other@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(test_user("taken@example.com")).await.unwrap();

        let result = repo.create(test_user("taken@example.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::UserAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(test_user("id@example.com")).await.unwrap();

        let found = repo.find_by_id(user.id).await.unwrap();
        assert_eq!(found, Some(user));

        let missing = repo.find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryUserRepository::new();
        repo.create(test_user("a@example.com")).await.unwrap();
        repo.create(test_user("b@example.com")).await.unwrap();
        repo.create(test_user("c@example.com")).await.unwrap();

        let emails: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com", "c@example.com"]);
    }

    #[tokio::test]
    async fn test_update_existing_user() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.create(test_user("update@example.com")).await.unwrap();

        user.name = "renamed".to_string();
        let updated = repo.update(user.clone()).await.unwrap();
        assert_eq!(updated.name, "renamed");

        let found = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.name, "renamed");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();

        let result = repo.update(test_user("ghost@example.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(test_user("gone@example.com")).await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
        assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(test_user("here@example.com")).await.unwrap();

        assert!(repo.exists_by_email("here@example.com").await.unwrap());
        assert!(!repo.exists_by_email("absent@example.com").await.unwrap());
    }
}
