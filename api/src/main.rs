use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

use te_api::app::{create_app, AppState};
use te_core::domain::entities::user::PERMISSION_SUPER_ADMIN;
use te_core::repositories::UserRepository;
use te_core::services::auth::AuthService;
use te_core::services::password::PasswordHasher;
use te_core::services::todo::TodoService;
use te_core::services::token::{TokenService, TokenServiceConfig};
use te_core::services::user::UserService;
use te_infra::{InMemoryRefreshTokenStore, InMemoryTodoRepository, InMemoryUserRepository};
use te_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env must land before AppConfig reads the environment
    dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting TaskEasy API Server");

    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT secrets are not configured; using development defaults");
    }

    let bind_address = config.server.bind_address();
    info!("Listening on {}", bind_address);

    // Create repository implementations
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let todo_repository = Arc::new(InMemoryTodoRepository::new());
    let refresh_token_store = Arc::new(InMemoryRefreshTokenStore::new());

    // Wire up the services
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let password_hasher = Arc::new(PasswordHasher::from(&config.auth.password));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&refresh_token_store),
        Arc::clone(&token_service),
        Arc::clone(&password_hasher),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&password_hasher),
    ));
    let todo_service = Arc::new(TodoService::new(
        Arc::clone(&todo_repository),
        Arc::clone(&user_repository),
    ));

    // Seed the bootstrap administrator so user management is reachable
    seed_admin(&user_service, user_repository.as_ref(), &config).await;

    let app_state = web::Data::new(AppState {
        auth_service,
        user_service,
        todo_service,
        token_service,
        config,
    });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

/// Creates the initial super administrator account from configuration
async fn seed_admin(
    user_service: &UserService<InMemoryUserRepository>,
    user_repository: &InMemoryUserRepository,
    config: &AppConfig,
) {
    let seed = &config.auth.seed_admin;
    if seed.is_using_default_password() {
        warn!("SEED_ADMIN_PASSWORD is not configured; using the development default");
    }

    let mut admin = user_service
        .create_user(&seed.name, &seed.email, &seed.password)
        .await
        .expect("failed to create the seed administrator account");
    admin.grant_permission(PERMISSION_SUPER_ADMIN);
    user_repository
        .update(admin)
        .await
        .expect("failed to grant the seed administrator permissions");

    info!("Seeded administrator account: {}", seed.email);
}
