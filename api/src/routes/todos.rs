//! Todo route handlers
//!
//! Every endpoint operates on the authenticated caller's own todo list.
//! The owning user is taken from the bearer token, never from the
//! request body, so one user can never reach another user's items.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::todo::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use te_core::repositories::{RefreshTokenStore, TodoRepository, UserRepository};
use te_core::services::todo::TodoUpdate;

/// Handler for GET /api/v1/todos
///
/// Lists the caller's todos in creation order.
pub async fn list_todos<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    match state.todo_service.list_todos(auth.user_id).await {
        Ok(todos) => {
            let response: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/todos
///
/// Creates a todo and links it to the caller's account.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Buy groceries",
///     "is_done": false
/// }
/// ```
pub async fn create_todo<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
    request: web::Json<CreateTodoRequest>,
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

    match state
        .todo_service
        .add_todo(auth.user_id, &request.name, request.is_done)
        .await
    {
        Ok(todo) => HttpResponse::Ok().json(TodoResponse::from(todo)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/todos/{id}
///
/// Applies a partial update to one of the caller's todos. Updating a
/// todo owned by someone else reports not found rather than forbidden,
/// so the route leaks nothing about other users' items.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Buy more groceries",
///     "is_done": true
/// }
/// ```
pub async fn update_todo<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTodoRequest>,
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

    let update = TodoUpdate {
        name: request.name.clone(),
        is_done: request.is_done,
    };

    match state
        .todo_service
        .update_todo(auth.user_id, path.into_inner(), update)
        .await
    {
        Ok(todo) => HttpResponse::Ok().json(TodoResponse::from(todo)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/todos/{id}
pub async fn delete_todo<U, S, T>(
    state: web::Data<AppState<U, S, T>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    match state
        .todo_service
        .remove_todo(auth.user_id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Todo deleted successfully"
        })),
        Err(error) => handle_domain_error(error),
    }
}
