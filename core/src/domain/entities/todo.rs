//! Todo entity representing a single task item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Todo entity representing a single task item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier for the todo
    pub id: Uuid,

    /// Task description
    pub name: String,

    /// Whether the task has been completed
    pub is_done: bool,

    /// Timestamp when the todo was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the todo was last updated
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new Todo
    pub fn new(name: String, is_done: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            is_done,
            created_at: now,
            updated_at: now,
        }
    }

    /// Renames the task
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Sets the completion state
    pub fn set_done(&mut self, is_done: bool) {
        self.is_done = is_done;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_creation() {
        let todo = Todo::new("buy milk".to_string(), false);

        assert_eq!(todo.name, "buy milk");
        assert!(!todo.is_done);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_todo_mutations() {
        let mut todo = Todo::new("draft report".to_string(), false);

        todo.set_done(true);
        assert!(todo.is_done);

        todo.rename("finish report".to_string());
        assert_eq!(todo.name, "finish report");
    }

    #[test]
    fn test_todo_serialization() {
        let todo = Todo::new("roundtrip".to_string(), true);

        let json = serde_json::to_string(&todo).unwrap();
        let deserialized: Todo = serde_json::from_str(&json).unwrap();

        assert_eq!(todo, deserialized);
    }
}
