//! Todo repository trait defining the interface for todo persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::todo::Todo;
use crate::errors::DomainError;

/// Repository trait for Todo entity persistence operations
///
/// Ownership is not tracked here. The user record carries the ids of the
/// todos it owns, so services resolve a user's todos with `find_by_ids`.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a new todo
    ///
    /// # Returns
    /// * `Ok(Todo)` - The stored todo
    /// * `Err(DomainError)` - Storage error occurred
    async fn insert(&self, todo: Todo) -> Result<Todo, DomainError>;

    /// Find a todo by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Todo))` - Todo found
    /// * `Ok(None)` - No todo found with given ID
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, DomainError>;

    /// Find all todos matching the given ids, preserving the id order
    ///
    /// Ids without a matching todo are skipped rather than reported as
    /// errors.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Todo>, DomainError>;

    /// Update an existing todo
    ///
    /// # Returns
    /// * `Ok(Todo)` - The updated todo
    /// * `Err(DomainError)` - Update failed (e.g., todo not found)
    async fn update(&self, todo: Todo) -> Result<Todo, DomainError>;

    /// Delete a todo
    ///
    /// # Returns
    /// * `Ok(true)` - Todo was deleted
    /// * `Ok(false)` - Todo not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
