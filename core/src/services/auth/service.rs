//! Login, logout, and access token renewal

use std::sync::Arc;

use crate::domain::entities::token::{RefreshClaims, TokenPair};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{RefreshTokenStore, UserRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Entry point for every credential and session operation
///
/// Orchestrates credential verification, token issuance, refresh token
/// tracking and revocation. All collaborators are injected at startup;
/// the service holds no mutable state of its own.
pub struct AuthService<U, S>
where
    U: UserRepository,
    S: RefreshTokenStore,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Store tracking currently valid refresh tokens
    refresh_token_store: Arc<S>,
    /// Token service for JWT issuance and verification
    token_service: Arc<TokenService>,
    /// Credential verifier for bcrypt password checks
    password_hasher: Arc<PasswordHasher>,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: RefreshTokenStore,
{
    /// Wires the service to its collaborators
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Account lookups by email and id
    /// * `refresh_token_store` - Tracking of issued refresh tokens
    /// * `token_service` - JWT issuance and verification
    /// * `password_hasher` - bcrypt credential checks
    pub fn new(
        user_repository: Arc<U>,
        refresh_token_store: Arc<S>,
        token_service: Arc<TokenService>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            refresh_token_store,
            token_service,
            password_hasher,
        }
    }

    /// Log a user in with email and password
    ///
    /// This method:
    /// 1. Looks up the account by login email
    /// 2. Verifies the password against the stored bcrypt hash
    /// 3. Issues an access/refresh token pair
    /// 4. Registers the refresh token so logout can revoke it
    ///
    /// # Arguments
    ///
    /// * `email` - The login email address
    /// * `password` - The plaintext password to verify
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens plus expiry metadata
    /// * `Err(DomainError)` - Unknown email, wrong password, or issuance failure
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        // Step 1: Look up the account by login email
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::EmailNotFound))?;

        // Step 2: Verify the password against the stored hash
        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::warn!(
                user_id = %user.id,
                event = "login_rejected",
                "Password verification failed"
            );
            return Err(DomainError::Auth(AuthError::PasswordMismatch));
        }

        // Step 3: Issue the access/refresh token pair
        let token_pair = self.token_service.issue_pair(&user)?;

        // Step 4: Track the refresh token until logout
        self.refresh_token_store
            .register(&token_pair.refresh_token)
            .await?;

        tracing::info!(
            user_id = %user.id,
            event = "user_logged_in",
            "User logged in"
        );

        Ok(token_pair)
    }

    /// Verify a refresh token's signature, expiry and issuer
    ///
    /// Any verification failure surfaces as `InvalidRefreshToken`; callers
    /// never learn whether a rejected token was expired, forged, or garbage.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw refresh token string from the client
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshClaims)` - The decoded claims if valid
    /// * `Err(DomainError)` - `TokenError::InvalidRefreshToken` otherwise
    pub fn verify_refresh_token(&self, token: &str) -> DomainResult<RefreshClaims> {
        self.token_service
            .verify_refresh_token(token)
            .map_err(|_| DomainError::Token(TokenError::InvalidRefreshToken))
    }

    /// Check whether a refresh token is currently tracked by the store
    ///
    /// # Arguments
    ///
    /// * `token` - The refresh token string
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The token was issued and has not been revoked
    /// * `Ok(false)` - The token is unknown or already revoked
    pub async fn is_refresh_token_registered(&self, token: &str) -> DomainResult<bool> {
        self.refresh_token_store.contains(token).await
    }

    /// Require a refresh token to be tracked by the store
    ///
    /// # Arguments
    ///
    /// * `token` - The refresh token string
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The token is tracked
    /// * `Err(DomainError)` - `TokenError::InvalidRefreshToken` when it is not
    pub async fn assert_refresh_token_registered(&self, token: &str) -> DomainResult<()> {
        if self.is_refresh_token_registered(token).await? {
            Ok(())
        } else {
            Err(DomainError::Token(TokenError::InvalidRefreshToken))
        }
    }

    /// Issue a new access token from a valid refresh token
    ///
    /// This method:
    /// 1. Verifies the refresh token's signature, expiry and issuer
    /// 2. Requires the token to still be tracked (logout revokes it)
    /// 3. Re-loads the user record; identity claims come from storage,
    ///    not from the old token
    /// 4. Issues a new access token. The refresh token is not rotated
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The refresh token presented by the client
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A freshly signed access token
    /// * `Err(DomainError)` - Invalid/revoked token or deleted user
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        // Step 1: Verify signature, expiry and issuer
        let claims = self.verify_refresh_token(refresh_token)?;

        // Step 2: The token must still be tracked
        self.assert_refresh_token_registered(refresh_token).await?;

        // Step 3: Re-load the user behind the verified claims
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidRefreshToken))?;
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        // Step 4: Issue a new access token
        let access_token = self.token_service.issue_access_token(&user)?;

        tracing::info!(
            user_id = %user.id,
            event = "access_token_refreshed",
            "Access token refreshed"
        );

        Ok(access_token)
    }

    /// Log a user out by revoking their refresh token
    ///
    /// Revoking a token that was never issued, or one that was already
    /// revoked, is not an error. Already-issued access tokens stay usable
    /// until their natural expiry; logout only prevents renewal.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The token being handed back for revocation
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let revoked = self.refresh_token_store.revoke(refresh_token).await?;

        if revoked {
            tracing::info!(event = "user_logged_out", "Refresh token revoked");
        }

        Ok(())
    }
}
