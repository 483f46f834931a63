use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use te_core::domain::entities::todo::Todo;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTodoRequest {
    /// Task description shown in the list
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Completion state, defaults to not done
    #[serde(default)]
    pub is_done: bool,
}

/// Partial update; absent fields keep their stored values
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub is_done: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: Uuid,
    pub name: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            name: todo.name,
            is_done: todo.is_done,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_todo_request_accepts_valid_input() {
        let request = CreateTodoRequest {
            name: "Buy groceries".to_string(),
            is_done: false,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_todo_request_rejects_empty_name() {
        let request = CreateTodoRequest {
            name: String::new(),
            is_done: false,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_todo_request_defaults_is_done() {
        let request: CreateTodoRequest =
            serde_json::from_str(r#"{ "name": "Buy groceries" }"#).unwrap();
        assert!(!request.is_done);
    }

    #[test]
    fn test_update_todo_request_allows_absent_fields() {
        let request = UpdateTodoRequest {
            name: None,
            is_done: Some(true),
        };
        assert!(request.validate().is_ok());
    }
}
