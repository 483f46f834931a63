use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::{LogoutResponse, RefreshTokenRequest};
use crate::handlers::error_handler::handle_domain_error;

use te_core::repositories::{RefreshTokenStore, TodoRepository, UserRepository};

use super::{clear_refresh_token_cookie, extract_refresh_token};

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the caller's refresh token and clears the refresh cookie.
/// Logging out with no token, or with a token that was already revoked,
/// still succeeds; the endpoint is idempotent. Outstanding access tokens
/// remain valid until they expire on their own.
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
///     "message": "Logged out successfully"
/// }
/// ```
pub async fn logout<U, S, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, T>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    // Revoke the refresh token when one was supplied
    if let Some(refresh_token) = extract_refresh_token(&req, body) {
        if let Err(error) = state.auth_service.logout(&refresh_token).await {
            return handle_domain_error(error);
        }
    }

    let response = LogoutResponse {
        message: "Logged out successfully".to_string(),
    };

    HttpResponse::Ok()
        .cookie(clear_refresh_token_cookie())
        .json(response)
}
