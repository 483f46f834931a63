use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use te_core::domain::entities::user::User;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name of the account
    #[validate(length(min = 3, max = 30))]
    pub name: String,

    /// Login email, unique across all accounts
    #[validate(email)]
    pub email: String,

    /// Plaintext password, hashed before storage
    #[validate(length(min = 6))]
    pub password: String,
}

/// Partial update; absent fields keep their stored values
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 6))]
    pub password: Option<String>,
}

/// User representation returned to clients
///
/// The stored password hash is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub permissions: Vec<String>,
    pub todos: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            permissions: user.permissions,
            todos: user.todos,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_accepts_valid_input() {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_user_request_rejects_short_name() {
        let request = CreateUserRequest {
            name: "Al".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_user_request_rejects_short_password() {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_user_request_allows_absent_fields() {
        let request = UpdateUserRequest {
            email: None,
            password: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_user_request_validates_present_fields() {
        let request = UpdateUserRequest {
            email: Some("not-an-email".to_string()),
            password: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$12$hash".to_string(),
        );
        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["name"], "Alice");
        assert!(json.get("password_hash").is_none());
    }
}
