//! Request and response data transfer objects

pub mod auth;
pub mod error;
pub mod todo;
pub mod user;

pub use auth::{AccessTokenResponse, LoginRequest, LogoutResponse, RefreshTokenRequest};
pub use error::ErrorResponse;
pub use todo::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, UserResponse};
