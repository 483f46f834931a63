//! Route table and shared state
//!
//! `create_app` assembles one `App` instance per worker thread; the
//! integration tests drive the same factory, so the routing seen in
//! tests is exactly what the binary serves.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, logout::logout, refresh::refresh as refresh_token};
use crate::routes::{todos, users};

use te_core::repositories::{RefreshTokenStore, TodoRepository, UserRepository};
use te_core::services::auth::AuthService;
use te_core::services::todo::TodoService;
use te_core::services::token::TokenService;
use te_core::services::user::UserService;
use te_shared::config::AppConfig;

/// Services shared by every handler, injected once at startup
pub struct AppState<U, S, T>
where
    U: UserRepository,
    S: RefreshTokenStore,
    T: TodoRepository,
{
    pub auth_service: Arc<AuthService<U, S>>,
    pub user_service: Arc<UserService<U>>,
    pub todo_service: Arc<TodoService<T, U>>,
    pub token_service: Arc<TokenService>,
    pub config: AppConfig,
}

/// Builds the application with its full route table and middleware stack
pub fn create_app<U, S, T>(
    app_state: web::Data<AppState<U, S, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: RefreshTokenStore + 'static,
    T: TodoRepository + 'static,
{
    // Both borrow from app_state, so build them before app_data takes it
    let cors = create_cors(&app_state.config.cors);
    let token_service = Arc::clone(&app_state.token_service);

    App::new()
        .app_data(app_state)
        // Registered last runs first, so CORS wraps the logger
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                // Auth endpoints stay public; the token IS the credential
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(login::<U, S, T>))
                        .route("/refresh", web::post().to(refresh_token::<U, S, T>))
                        .route("/logout", web::post().to(logout::<U, S, T>)),
                )
                // User management routes, super admin only
                .service(
                    web::scope("/users")
                        .wrap(JwtAuth::new(Arc::clone(&token_service)))
                        .route("", web::get().to(users::list_users::<U, S, T>))
                        .route("", web::post().to(users::create_user::<U, S, T>))
                        .route("/{id}", web::get().to(users::get_user::<U, S, T>))
                        .route("/{id}", web::put().to(users::update_user::<U, S, T>))
                        .route("/{id}", web::delete().to(users::delete_user::<U, S, T>)),
                )
                // Todo routes, scoped to the authenticated user
                .service(
                    web::scope("/todos")
                        .wrap(JwtAuth::new(Arc::clone(&token_service)))
                        .route("", web::get().to(todos::list_todos::<U, S, T>))
                        .route("", web::post().to(todos::create_todo::<U, S, T>))
                        .route("/{id}", web::put().to(todos::update_todo::<U, S, T>))
                        .route("/{id}", web::delete().to(todos::delete_todo::<U, S, T>)),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

/// Liveness probe, also reports the running version
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "task-easy-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Self-describing index of the v1 endpoints
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "TaskEasy API v1",
        "endpoints": {
            "health": "/health",
            "auth": {
                "login": {
                    "path": "/api/v1/auth/login",
                    "method": "POST",
                    "description": "Authenticate with email and password"
                },
                "refresh": {
                    "path": "/api/v1/auth/refresh",
                    "method": "POST",
                    "description": "Mint a new access token from the refresh cookie"
                },
                "logout": {
                    "path": "/api/v1/auth/logout",
                    "method": "POST",
                    "description": "Revoke the refresh token and clear the cookie"
                }
            },
            "users": {
                "path": "/api/v1/users",
                "methods": ["GET", "POST", "PUT", "DELETE"],
                "description": "Account management, super admin only",
                "requires_auth": true
            },
            "todos": {
                "path": "/api/v1/todos",
                "methods": ["GET", "POST", "PUT", "DELETE"],
                "description": "The authenticated user's todo list",
                "requires_auth": true
            }
        }
    }))
}

/// JSON body for anything outside the route table
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "No route matches the requested path"
    }))
}
