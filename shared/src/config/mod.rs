//! Process configuration, read once at startup
//!
//! Split by concern:
//! - `auth` - token secrets, bcrypt cost, seed administrator
//! - `environment` - which environment the process runs in
//! - `server` - HTTP listener and CORS

pub mod auth;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, PasswordConfig, SeedAdminConfig};
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Root of the configuration tree
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Runtime environment
    pub environment: Environment,

    /// HTTP listener settings
    pub server: ServerConfig,

    /// Auth subsystem settings
    pub auth: AuthConfig,

    /// Cross-origin policy
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Assembles the whole tree from environment variables
    ///
    /// Development gets the permissive CORS policy; any other environment
    /// reads `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let cors = if environment.is_development() {
            CorsConfig::development()
        } else {
            CorsConfig::from_env()
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors,
        }
    }
}
