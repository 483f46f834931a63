//! In-memory implementation of the TodoRepository trait.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use te_core::domain::entities::todo::Todo;
use te_core::errors::DomainError;
use te_core::repositories::TodoRepository;

/// In-memory implementation of TodoRepository
///
/// Stores every todo in one insertion-ordered `Vec`; ownership is not
/// tracked here. Services resolve a user's todos through `find_by_ids`
/// with the id list carried on the user record.
pub struct InMemoryTodoRepository {
    /// Insertion-ordered todo records
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    /// Create a new, empty todo repository
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;
        todos.push(todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, DomainError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Todo>, DomainError> {
        let todos = self.todos.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| todos.iter().find(|t| t.id == *id).cloned())
            .collect())
    }

    async fn update(&self, todo: Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|t| t.id == todo.id) {
            Some(existing) => {
                *existing = todo.clone();
                Ok(todo)
            }
            None => Err(DomainError::NotFound {
                resource: "todo".to_string(),
            }),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut todos = self.todos.write().await;
        match todos.iter().position(|t| t.id == id) {
            Some(index) => {
                todos.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo
            .insert(Todo::new("Task 1".to_string(), false))
            .await
            .unwrap();

        let found = repo.find_by_id(todo.id).await.unwrap();
        assert_eq!(found, Some(todo));

        let missing = repo.find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_by_ids_preserves_id_order() {
        let repo = InMemoryTodoRepository::new();
        let first = repo
            .insert(Todo::new("first".to_string(), false))
            .await
            .unwrap();
        let second = repo
            .insert(Todo::new("second".to_string(), true))
            .await
            .unwrap();

        // Requested in reverse of insertion order
        let todos = repo.find_by_ids(&[second.id, first.id]).await.unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].name, "second");
        assert_eq!(todos[1].name, "first");
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_missing() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo
            .insert(Todo::new("present".to_string(), false))
            .await
            .unwrap();

        let todos = repo
            .find_by_ids(&[Uuid::new_v4(), todo.id, Uuid::new_v4()])
            .await
            .unwrap();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].name, "present");
    }

    #[tokio::test]
    async fn test_update_existing_todo() {
        let repo = InMemoryTodoRepository::new();
        let mut todo = repo
            .insert(Todo::new("Task 1".to_string(), false))
            .await
            .unwrap();

        todo.set_done(true);
        let updated = repo.update(todo.clone()).await.unwrap();
        assert!(updated.is_done);

        let found = repo.find_by_id(todo.id).await.unwrap().unwrap();
        assert!(found.is_done);
    }

    #[tokio::test]
    async fn test_update_missing_todo() {
        let repo = InMemoryTodoRepository::new();

        let result = repo.update(Todo::new("ghost".to_string(), false)).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo
            .insert(Todo::new("short lived".to_string(), false))
            .await
            .unwrap();

        assert!(repo.delete(todo.id).await.unwrap());
        assert!(!repo.delete(todo.id).await.unwrap());
        assert!(repo.find_by_id(todo.id).await.unwrap().is_none());
    }
}
