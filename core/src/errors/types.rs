//! Failure taxonomy for credentials and tokens
//!
//! Error display strings double as the client-facing messages, so the
//! login and refresh failures carry the exact wording the API contract
//! promises.

use thiserror::Error;

/// Credential and principal failures
///
/// The HTTP status mapping lives in the presentation layer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("No Matching Email")]
    EmailNotFound,

    #[error("Passwords Don't Match")]
    PasswordMismatch,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token issuance and verification failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
