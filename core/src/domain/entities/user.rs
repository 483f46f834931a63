//! User entity representing a registered account in the TaskEasy system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Permission granted to every account on creation
pub const PERMISSION_USER: &str = "user";

/// Permission required for user management endpoints
pub const PERMISSION_SUPER_ADMIN: &str = "super admin";

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary identifier, assigned at creation
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Login email, unique across the system
    pub email: String,

    /// bcrypt hash of the user's password
    ///
    /// Never serialized into API responses; the DTO layer exposes only
    /// the public fields.
    pub password_hash: String,

    /// Permission strings attached to this account
    pub permissions: Vec<String>,

    /// Identifiers of the todos owned by this user
    pub todos: Vec<Uuid>,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with the default `user` permission
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            permissions: vec![PERMISSION_USER.to_string()],
            todos: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Grants an additional permission, ignoring duplicates
    pub fn grant_permission(&mut self, permission: &str) {
        if !self.has_permission(permission) {
            self.permissions.push(permission.to_string());
            self.updated_at = Utc::now();
        }
    }

    /// Checks whether the user carries the given permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Checks whether the user may manage other users
    pub fn is_super_admin(&self) -> bool {
        self.has_permission(PERMISSION_SUPER_ADMIN)
    }

    /// Links a todo to this user
    pub fn attach_todo(&mut self, todo_id: Uuid) {
        self.todos.push(todo_id);
        self.updated_at = Utc::now();
    }

    /// Unlinks a todo from this user
    ///
    /// Returns `true` if the todo was linked, `false` otherwise.
    pub fn detach_todo(&mut self, todo_id: Uuid) -> bool {
        if let Some(index) = self.todos.iter().position(|id| *id == todo_id) {
            self.todos.remove(index);
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    /// Checks whether the user owns the given todo
    pub fn owns_todo(&self, todo_id: Uuid) -> bool {
        self.todos.contains(&todo_id)
    }
}
