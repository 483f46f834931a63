//! The objects the services operate on: users, todos, and token payloads.

pub mod todo;
pub mod token;
pub mod user;

pub use todo::Todo;
pub use token::{
    AccessClaims, RefreshClaims, TokenPair,
    ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_EXPIRY_SECONDS, JWT_ISSUER,
};
pub use user::{User, PERMISSION_SUPER_ADMIN, PERMISSION_USER};
