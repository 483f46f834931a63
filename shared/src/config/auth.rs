//! Settings for tokens, password hashing, and the bootstrap administrator

use serde::{Deserialize, Serialize};

/// Token signing and lifetime settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Signing secret for access tokens
    pub access_secret: String,

    /// Signing secret for refresh tokens
    ///
    /// Kept distinct from the access secret so a leaked access key
    /// cannot be used to mint refresh tokens.
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,

    /// Issuer claim stamped on every token
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("access-secret-change-in-production"),
            refresh_secret: String::from("refresh-secret-change-in-production"),
            access_token_expiry: 50_000,      // ~14 hours
            refresh_token_expiry: 2_000_000,  // ~23 days
            issuer: String::from("taskeasy"),
        }
    }
}

impl JwtConfig {
    /// Builds a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    pub fn with_refresh_expiry_seconds(mut self, seconds: i64) -> Self {
        self.refresh_token_expiry = seconds;
        self
    }

    /// True when either secret still carries a placeholder value
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret.ends_with("change-in-production")
            || self.refresh_secret.ends_with("change-in-production")
    }
}

/// bcrypt settings for password storage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// Cost factor, each increment doubles hashing time
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 12 }
    }
}

/// Bootstrap administrator seeded on startup
///
/// User management endpoints require the super admin permission, so a
/// fresh process needs one administrator account before any other user
/// can be created.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedAdminConfig {
    /// Administrator display name
    pub name: String,

    /// Administrator login email
    pub email: String,

    /// Administrator password (plaintext, hashed before storage)
    pub password: String,
}

impl Default for SeedAdminConfig {
    fn default() -> Self {
        Self {
            name: String::from("admin"),
            email: String::from("admin@taskeasy.local"),
            password: String::from("change-me-admin"),
        }
    }
}

impl SeedAdminConfig {
    /// True when the password was never changed from the shipped value
    pub fn is_using_default_password(&self) -> bool {
        self.password == "change-me-admin"
    }
}

/// Everything the auth subsystem reads at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Token signing and lifetimes
    pub jwt: JwtConfig,

    /// Password hashing cost
    #[serde(default)]
    pub password: PasswordConfig,

    /// Bootstrap administrator account
    #[serde(default)]
    pub seed_admin: SeedAdminConfig,
}

impl AuthConfig {
    /// Reads the `JWT_*`, `BCRYPT_COST`, and `SEED_ADMIN_*` variables
    pub fn from_env() -> Self {
        let access_secret = std::env::var("JWT_ACCESS_SECRET")
            .unwrap_or_else(|_| "development-access-secret-change-in-production".to_string());
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| "development-refresh-secret-change-in-production".to_string());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "50000".to_string())
            .parse()
            .unwrap_or(50_000);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "2000000".to_string())
            .parse()
            .unwrap_or(2_000_000);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "12".to_string())
            .parse()
            .unwrap_or(12);

        let seed_admin = SeedAdminConfig {
            name: std::env::var("SEED_ADMIN_NAME").unwrap_or_else(|_| "admin".to_string()),
            email: std::env::var("SEED_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@taskeasy.local".to_string()),
            password: std::env::var("SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "change-me-admin".to_string()),
        };

        Self {
            jwt: JwtConfig {
                access_secret,
                refresh_secret,
                access_token_expiry,
                refresh_token_expiry,
                issuer: String::from("taskeasy"),
            },
            password: PasswordConfig { bcrypt_cost },
            seed_admin,
        }
    }

    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.jwt.access_token_expiry
    }

    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.jwt.refresh_token_expiry
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            password: PasswordConfig::default(),
            seed_admin: SeedAdminConfig::default(),
        }
    }
}
