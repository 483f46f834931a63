//! User management route handlers
//!
//! All endpoints require a bearer token whose claims carry the
//! `"super admin"` permission. Ordinary users manage their todos through
//! the todo routes; accounts themselves are administered here.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use te_core::errors::{AuthError, DomainError, DomainResult};
use te_core::repositories::{RefreshTokenStore, TodoRepository, UserRepository};
use te_core::services::user::UserUpdate;

fn require_super_admin(auth: &AuthContext) -> DomainResult<()> {
    if auth.is_super_admin() {
        Ok(())
    } else {
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    }
}

/// Handler for GET /api/v1/users
///
/// Lists every account in insertion order.
pub async fn list_users<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    if let Err(error) = require_super_admin(&auth) {
        return handle_domain_error(error);
    }

    match state.user_service.list_users().await {
        Ok(users) => {
            let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/users
///
/// Creates an account with the default `"user"` permission and an empty
/// todo list.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Alice",
///     "email": "alice@example.com",
///     "password": "secret-password"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Name, email, or password outside the schema rules
/// - 409 Conflict: Email already registered
pub async fn create_user<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    if let Err(error) = require_super_admin(&auth) {
        return handle_domain_error(error);
    }

    // Validate request data
    if let Err(validation_errors) = request.validate() {
        return handle_validation_errors(validation_errors);
    }

    match state
        .user_service
        .create_user(&request.name, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/users/{id}
pub async fn get_user<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    if let Err(error) = require_super_admin(&auth) {
        return handle_domain_error(error);
    }

    match state.user_service.get_user(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/users/{id}
///
/// Applies a partial update. A new password is re-hashed before storage;
/// a new email must not collide with another account.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "new@example.com",
///     "password": "new-password"
/// }
/// ```
pub async fn update_user<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    if let Err(error) = require_super_admin(&auth) {
        return handle_domain_error(error);
    }

    // Validate request data
    if let Err(validation_errors) = request.validate() {
        return handle_validation_errors(validation_errors);
    }

    let update = UserUpdate {
        email: request.email.clone(),
        password: request.password.clone(),
    };

    match state.user_service.update_user(path.into_inner(), update).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/users/{id}
pub async fn delete_user<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    if let Err(error) = require_super_admin(&auth) {
        return handle_domain_error(error);
    }

    match state.user_service.delete_user(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "User deleted successfully"
        })),
        Err(error) => handle_domain_error(error),
    }
}
