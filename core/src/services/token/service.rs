//! JWT encoding and decoding behind the domain error types

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{AccessClaims, RefreshClaims, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access and refresh tokens
///
/// Access and refresh tokens are signed with distinct secrets, so a
/// token of one class can never pass verification as the other. The
/// service is stateless; all operations are deterministic, CPU-bound
/// encoding and decoding.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Derives the per-class signing keys and the shared validation rules
    ///
    /// Key material is prepared once here so issuing and verifying stay
    /// allocation-free on the hot path.
    pub fn new(config: TokenServiceConfig) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
        }
    }

    /// Issues a signed access token carrying the user's identity claims
    ///
    /// # Arguments
    ///
    /// * `user` - The user record the token describes
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = AccessClaims::new(
            user,
            self.config.access_token_expiry_seconds,
            &self.config.issuer,
        );
        encode(&Header::default(), &claims, &self.access_encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Issues a signed refresh token carrying only the subject claim
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = RefreshClaims::new(
            user_id,
            self.config.refresh_token_expiry_seconds,
            &self.config.issuer,
        );
        encode(&Header::default(), &claims, &self.refresh_encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Issues an access/refresh token pair for a user
    ///
    /// # Arguments
    ///
    /// * `user` - The user record to issue tokens for
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens plus their expiry metadata
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.issue_refresh_token(user.id)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_seconds,
            self.config.refresh_token_expiry_seconds,
        ))
    }

    /// Checks an access token's signature, expiry, and issuer
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, DomainError> {
        let token_data = decode::<AccessClaims>(token, &self.access_decoding_key, &self.validation)
            .map_err(map_decode_error)?;

        Ok(token_data.claims)
    }

    /// Checks a refresh token's signature, expiry, and issuer
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshClaims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, DomainError> {
        let token_data =
            decode::<RefreshClaims>(token, &self.refresh_decoding_key, &self.validation)
                .map_err(map_decode_error)?;

        Ok(token_data.claims)
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.config.refresh_token_expiry_seconds
    }
}

/// Maps jsonwebtoken decode failures onto the domain token errors
fn map_decode_error(error: jsonwebtoken::errors::Error) -> DomainError {
    match error.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            DomainError::Token(TokenError::TokenExpired)
        }
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            DomainError::Token(TokenError::InvalidSignature)
        }
        _ => DomainError::Token(TokenError::InvalidTokenFormat),
    }
}
