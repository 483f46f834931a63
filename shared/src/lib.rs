//! Pieces every TaskEasy crate needs: the configuration tree and the
//! wire-level error payload. Nothing here depends on the domain layer.

pub mod config;
pub mod types;

// Crate-root aliases for the handful of names used everywhere
pub use config::{
    AppConfig, AuthConfig, CorsConfig, Environment, JwtConfig, PasswordConfig, SeedAdminConfig,
    ServerConfig,
};
pub use types::ErrorResponse;
