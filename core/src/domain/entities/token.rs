//! JWT claim payloads and the token pair issued on login.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Default access token lifetime in seconds
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 50_000;

/// Default refresh token lifetime in seconds
pub const REFRESH_TOKEN_EXPIRY_SECONDS: i64 = 2_000_000;

/// JWT issuer
pub const JWT_ISSUER: &str = "taskeasy";

/// Claims structure for access token payloads
///
/// Access tokens carry the identity fields handlers need, so protected
/// routes never touch storage just to know who is calling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Display name of the user
    pub name: String,

    /// Login email of the user
    pub email: String,

    /// Permission strings attached to the account
    pub permissions: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl AccessClaims {
    /// Creates new access token claims for a user
    ///
    /// # Arguments
    ///
    /// * `user` - The user record the claims describe
    /// * `expiry_seconds` - Lifetime of the token in seconds
    /// * `issuer` - Issuer claim value
    ///
    /// # Returns
    ///
    /// A new `AccessClaims` instance
    pub fn new(user: &User, expiry_seconds: i64, issuer: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            permissions: user.permissions.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// True once the expiry instant has passed
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Parses the subject back into a user identifier
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Claims structure for refresh token payloads
///
/// Refresh tokens carry only the subject. Identity fields are re-read
/// from storage when a new access token is issued, so a rename or a
/// permission change takes effect on the next refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl RefreshClaims {
    /// Creates new refresh token claims for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `expiry_seconds` - Lifetime of the token in seconds
    /// * `issuer` - Issuer claim value
    ///
    /// # Returns
    ///
    /// A new `RefreshClaims` instance
    pub fn new(user_id: Uuid, expiry_seconds: i64, issuer: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// True once the expiry instant has passed
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Parses the subject back into a user identifier
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Token pair issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer credential
    pub access_token: String,

    /// Long-lived renewal credential
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Bundles freshly issued tokens with their lifetimes
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}
