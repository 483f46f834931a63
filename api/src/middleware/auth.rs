//! Bearer-token authentication for the protected route scopes.
//!
//! The middleware reads the `Authorization` header, checks the access
//! token signature and expiry, and stores the caller's identity in the
//! request extensions. Handlers behind it receive that identity through
//! the [`AuthContext`] extractor.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use te_core::{
    domain::entities::token::AccessClaims,
    domain::entities::user::PERMISSION_SUPER_ADMIN,
    errors::{DomainError, TokenError},
    services::token::TokenService,
};
use uuid::Uuid;

/// Identity of the authenticated caller, taken from a verified access token
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// UUID from the token subject
    pub user_id: Uuid,
    /// Display name carried in the token
    pub name: String,
    /// Login email carried in the token
    pub email: String,
    /// Permission strings attached to the account at issue time
    pub permissions: Vec<String>,
}

impl AuthContext {
    /// Builds the caller context out of verified access claims
    ///
    /// Fails when the subject claim does not parse as a UUID.
    pub fn from_claims(claims: AccessClaims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))?;
        Ok(Self {
            user_id,
            name: claims.name,
            email: claims.email,
            permissions: claims.permissions,
        })
    }

    /// Checks whether the caller carries the given permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Checks whether the caller is a super administrator
    pub fn is_super_admin(&self) -> bool {
        self.has_permission(PERMISSION_SUPER_ADMIN)
    }
}

/// Middleware factory guarding a route scope with access token checks
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// The wrapped service produced by [`JwtAuth`]
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing or invalid Authorization header"));
                }
            };

            let claims = match token_service.verify_access_token(&token) {
                Ok(claims) => claims,
                Err(error) => {
                    return Err(ErrorUnauthorized(format!(
                        "Token verification failed: {}",
                        error
                    )));
                }
            };

            let auth_context = match AuthContext::from_claims(claims) {
                Ok(context) => context,
                Err(error) => {
                    return Err(ErrorUnauthorized(format!("Invalid token: {}", error)));
                }
            };

            // Handlers read the identity back via the FromRequest impl below
            req.extensions_mut().insert(auth_context);

            service.call(req).await
        })
    }
}

/// Returns the token following the `Bearer ` scheme prefix, if any
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Required-authentication extractor; fails when no middleware ran upstream
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
