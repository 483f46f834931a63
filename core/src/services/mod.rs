//! The use-case layer: one service per resource plus the token machinery.

pub mod auth;
pub mod password;
pub mod todo;
pub mod token;
pub mod user;

pub use auth::AuthService;
pub use password::PasswordHasher;
pub use todo::{TodoService, TodoUpdate};
pub use token::{TokenService, TokenServiceConfig};
pub use user::{UserService, UserUpdate};
