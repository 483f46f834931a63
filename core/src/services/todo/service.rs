//! Todo management service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::todo::Todo;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TodoRepository, UserRepository};

/// Partial update applied to an existing todo
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct TodoUpdate {
    /// New task description
    pub name: Option<String>,
    /// New completion state
    pub is_done: Option<bool>,
}

/// Service for per-user todo management
///
/// Every operation is scoped to the calling user. Ownership lives on the
/// user record as a list of todo ids; a todo that is not linked there is
/// invisible to that user, whoever created it.
pub struct TodoService<T, U>
where
    T: TodoRepository,
    U: UserRepository,
{
    /// Todo repository for task persistence
    todo_repository: Arc<T>,
    /// User repository for ownership resolution
    user_repository: Arc<U>,
}

impl<T, U> TodoService<T, U>
where
    T: TodoRepository,
    U: UserRepository,
{
    /// Create a new todo management service
    ///
    /// # Arguments
    ///
    /// * `todo_repository` - Repository for todo persistence
    /// * `user_repository` - Repository for user data access
    pub fn new(todo_repository: Arc<T>, user_repository: Arc<U>) -> Self {
        Self {
            todo_repository,
            user_repository,
        }
    }

    /// Add a new todo owned by the given user
    ///
    /// This method:
    /// 1. Loads the owning user, failing when the account does not exist
    /// 2. Inserts the todo
    /// 3. Links the todo id into the user's owned list
    ///
    /// # Arguments
    ///
    /// * `user_id` - The owning user's UUID
    /// * `name` - Task description
    /// * `is_done` - Initial completion state
    ///
    /// # Returns
    ///
    /// * `Ok(Todo)` - The stored todo
    /// * `Err(DomainError)` - Missing user or storage failure
    pub async fn add_todo(&self, user_id: Uuid, name: &str, is_done: bool) -> DomainResult<Todo> {
        // Step 1: The owning user must exist
        let mut user = self.load_user(user_id).await?;

        // Step 2: Insert the todo
        let todo = self
            .todo_repository
            .insert(Todo::new(name.to_string(), is_done))
            .await?;

        // Step 3: Link the todo to its owner
        user.attach_todo(todo.id);
        self.user_repository.update(user).await?;

        tracing::info!(
            user_id = %user_id,
            todo_id = %todo.id,
            event = "todo_added",
            "Todo added"
        );

        Ok(todo)
    }

    /// List the todos owned by the given user, oldest first
    ///
    /// # Arguments
    ///
    /// * `user_id` - The owning user's UUID
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Todo>)` - The user's todos in the order they were linked
    /// * `Err(DomainError)` - Missing user or storage failure
    pub async fn list_todos(&self, user_id: Uuid) -> DomainResult<Vec<Todo>> {
        let user = self.load_user(user_id).await?;
        self.todo_repository.find_by_ids(&user.todos).await
    }

    /// Apply a partial update to a todo the user owns
    ///
    /// A todo that exists but belongs to another user is reported exactly
    /// like a missing one.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The calling user's UUID
    /// * `todo_id` - The todo to update
    /// * `update` - Fields to change
    ///
    /// # Returns
    ///
    /// * `Ok(Todo)` - The updated todo
    /// * `Err(DomainError)` - Not owned, missing, or storage failure
    pub async fn update_todo(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        update: TodoUpdate,
    ) -> DomainResult<Todo> {
        // Step 1: Resolve the todo through the caller's owned list
        let user = self.load_user(user_id).await?;
        let mut todo = self.load_owned_todo(&user, todo_id).await?;

        // Step 2: Apply the changes
        if let Some(name) = update.name {
            todo.rename(name);
        }
        if let Some(is_done) = update.is_done {
            todo.set_done(is_done);
        }

        // Step 3: Persist the updated todo
        let updated = self.todo_repository.update(todo).await?;

        tracing::info!(
            user_id = %user_id,
            todo_id = %todo_id,
            event = "todo_updated",
            "Todo updated"
        );

        Ok(updated)
    }

    /// Remove a todo the user owns
    ///
    /// This method:
    /// 1. Resolves the todo through the caller's owned list
    /// 2. Deletes it from storage
    /// 3. Unlinks the id from the user record
    ///
    /// # Arguments
    ///
    /// * `user_id` - The calling user's UUID
    /// * `todo_id` - The todo to remove
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The todo was removed
    /// * `Err(DomainError)` - Not owned, missing, or storage failure
    pub async fn remove_todo(&self, user_id: Uuid, todo_id: Uuid) -> DomainResult<()> {
        // Step 1: Resolve the todo through the caller's owned list
        let mut user = self.load_user(user_id).await?;
        if !user.owns_todo(todo_id) {
            return Err(DomainError::NotFound {
                resource: "todo".to_string(),
            });
        }

        // Step 2: Delete from storage
        self.todo_repository.delete(todo_id).await?;

        // Step 3: Unlink from the owner
        user.detach_todo(todo_id);
        self.user_repository.update(user).await?;

        tracing::info!(
            user_id = %user_id,
            todo_id = %todo_id,
            event = "todo_removed",
            "Todo removed"
        );

        Ok(())
    }

    async fn load_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    async fn load_owned_todo(&self, user: &User, todo_id: Uuid) -> DomainResult<Todo> {
        if !user.owns_todo(todo_id) {
            return Err(DomainError::NotFound {
                resource: "todo".to_string(),
            });
        }

        self.todo_repository
            .find_by_id(todo_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "todo".to_string(),
            })
    }
}
