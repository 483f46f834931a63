use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{AccessTokenResponse, LoginRequest};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};

use te_core::repositories::{RefreshTokenStore, TodoRepository, UserRepository};

use super::refresh_token_cookie;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates a user with email and password. On success the refresh
/// token is set as an `HttpOnly` cookie and the access token is returned
/// in the response body for use as a bearer header.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "test@example.com",
///     "password": "password"
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
/// - 400 Bad Request: Malformed email or empty password
/// - 401 Unauthorized: Password does not match
/// - 404 Not Found: No account with that email
pub async fn login<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    // Validate request data
    if let Err(validation_errors) = request.validate() {
        return handle_validation_errors(validation_errors);
    }

    // Call the auth service to authenticate the user
    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(token_pair) => {
            let cookie =
                refresh_token_cookie(&token_pair.refresh_token, token_pair.refresh_expires_in);
            let response = AccessTokenResponse {
                access_token: token_pair.access_token,
                expires_in: token_pair.access_expires_in,
            };

            HttpResponse::Ok().cookie(cookie).json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}
