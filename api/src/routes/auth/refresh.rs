use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::{AccessTokenResponse, RefreshTokenRequest};
use crate::handlers::error_handler::handle_domain_error;

use te_core::errors::{DomainError, TokenError};
use te_core::repositories::{RefreshTokenStore, TodoRepository, UserRepository};

use super::extract_refresh_token;

/// Handler for POST /api/v1/auth/refresh
///
/// Issues a fresh access token from a tracked refresh token. The refresh
/// token is read from the `refresh_token` cookie, or from the JSON body
/// for clients that do not carry cookies. The refresh token itself is
/// not rotated.
///
/// # Request Body (cookie fallback)
///
/// ```json
/// {
///     "refresh_token": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "expires_in": 50000
/// }
/// ```
///
/// ## Errors
/// - 403 Forbidden: Missing, untracked, expired, or forged refresh token
/// - 404 Not Found: Token subject no longer exists
pub async fn refresh<U, S, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, T>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    let refresh_token = match extract_refresh_token(&req, body) {
        Some(token) => token,
        None => {
            return handle_domain_error(DomainError::Token(TokenError::InvalidRefreshToken));
        }
    };

    // Call the auth service to mint a new access token
    match state.auth_service.refresh(&refresh_token).await {
        Ok(access_token) => {
            let response = AccessTokenResponse {
                access_token,
                expires_in: state.token_service.access_token_expiry_seconds(),
            };

            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}
