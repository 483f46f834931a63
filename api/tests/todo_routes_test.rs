//! Integration tests for the todo endpoints

use actix_web::http::header;
use actix_web::{test, web};
use std::sync::Arc;
use uuid::Uuid;

use te_api::app::{create_app, AppState};
use te_core::services::{
    auth::AuthService,
    password::PasswordHasher,
    todo::TodoService,
    token::{TokenService, TokenServiceConfig},
    user::UserService,
};
use te_infra::{InMemoryRefreshTokenStore, InMemoryTodoRepository, InMemoryUserRepository};
use te_shared::config::{AppConfig, CorsConfig};

type TestState =
    AppState<InMemoryUserRepository, InMemoryRefreshTokenStore, InMemoryTodoRepository>;

const TEST_BCRYPT_COST: u32 = 4;

fn create_test_state() -> web::Data<TestState> {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let todo_repository = Arc::new(InMemoryTodoRepository::new());
    let refresh_token_store = Arc::new(InMemoryRefreshTokenStore::new());

    let token_config = TokenServiceConfig {
        access_secret: "todo-routes-access-secret".to_string(),
        refresh_secret: "todo-routes-refresh-secret".to_string(),
        ..TokenServiceConfig::default()
    };
    let token_service = Arc::new(TokenService::new(token_config));
    let password_hasher = Arc::new(PasswordHasher::new(TEST_BCRYPT_COST));

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

    let config = AppConfig {
        cors: CorsConfig::development(),
        ..AppConfig::default()
    };

    web::Data::new(AppState {
        auth_service,
        user_service,
        todo_service,
        token_service,
        config,
    })
}

/// Seeds an account and returns a bearer token for it
async fn seed_and_login(state: &web::Data<TestState>, name: &str, email: &str) -> String {
    state
        .user_service
        .create_user(name, email, "password")
        .await
        .expect("seed user");
    state
        .auth_service
        .login(email, "password")
        .await
        .expect("login")
        .access_token
}

#[actix_web::test]
async fn test_todo_routes_require_authentication() {
    let state = create_test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/v1/todos").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_create_todo() {
    let state = create_test_state();
    let token = seed_and_login(&state, "Test User", "test@example.com").await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "Buy groceries" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Buy groceries");
    assert_eq!(body["is_done"], false);
    assert!(body["id"].as_str().is_some());
}

#[actix_web::test]
async fn test_create_todo_rejects_empty_name() {
    let state = create_test_state();
    let token = seed_and_login(&state, "Test User", "test@example.com").await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_list_todos_in_creation_order() {
    let state = create_test_state();
    let token = seed_and_login(&state, "Test User", "test@example.com").await;
    let app = test::init_service(create_app(state)).await;

    for name in ["First task", "Second task", "Third task"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/todos")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "name": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("array of todos")
        .iter()
        .map(|todo| todo["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First task", "Second task", "Third task"]);
}

#[actix_web::test]
async fn test_todos_are_scoped_to_owner() {
    let state = create_test_state();
    let alice_token = seed_and_login(&state, "Alice", "alice@example.com").await;
    let bob_token = seed_and_login(&state, "Bob", "bob@example.com").await;
    let app = test::init_service(create_app(state)).await;

    for name in ["Alice task one", "Alice task two"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/todos")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", alice_token)))
            .set_json(serde_json::json!({ "name": name }))
            .to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::post()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", bob_token)))
        .set_json(serde_json::json!({ "name": "Bob task" }))
        .to_request();
    test::call_service(&app, req).await;

    let alice_list = test::TestRequest::get()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", alice_token)))
        .to_request();
    let alice_resp = test::call_service(&app, alice_list).await;
    let alice_body: serde_json::Value = test::read_body_json(alice_resp).await;
    assert_eq!(alice_body.as_array().unwrap().len(), 2);

    let bob_list = test::TestRequest::get()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", bob_token)))
        .to_request();
    let bob_resp = test::call_service(&app, bob_list).await;
    let bob_body: serde_json::Value = test::read_body_json(bob_resp).await;
    assert_eq!(bob_body.as_array().unwrap().len(), 1);
    assert_eq!(bob_body[0]["name"], "Bob task");
}

#[actix_web::test]
async fn test_update_todo() {
    let state = create_test_state();
    let token = seed_and_login(&state, "Test User", "test@example.com").await;
    let app = test::init_service(create_app(state)).await;

    let create_req = test::TestRequest::post()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "Draft report" }))
        .to_request();
    let create_resp = test::call_service(&app, create_req).await;
    let created: serde_json::Value = test::read_body_json(create_resp).await;
    let todo_id = created["id"].as_str().unwrap().to_string();

    let update_req = test::TestRequest::put()
        .uri(&format!("/api/v1/todos/{}", todo_id))
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "Submit report", "is_done": true }))
        .to_request();
    let update_resp = test::call_service(&app, update_req).await;

    assert_eq!(update_resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(update_resp).await;
    assert_eq!(body["name"], "Submit report");
    assert_eq!(body["is_done"], true);
}

#[actix_web::test]
async fn test_update_other_users_todo_not_found() {
    let state = create_test_state();
    let alice_token = seed_and_login(&state, "Alice", "alice@example.com").await;
    let bob_token = seed_and_login(&state, "Bob", "bob@example.com").await;
    let app = test::init_service(create_app(state)).await;

    let create_req = test::TestRequest::post()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", alice_token)))
        .set_json(serde_json::json!({ "name": "Alice task" }))
        .to_request();
    let create_resp = test::call_service(&app, create_req).await;
    let created: serde_json::Value = test::read_body_json(create_resp).await;
    let todo_id = created["id"].as_str().unwrap().to_string();

    // Another account sees someone else's todo as missing, not forbidden
    let update_req = test::TestRequest::put()
        .uri(&format!("/api/v1/todos/{}", todo_id))
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", bob_token)))
        .set_json(serde_json::json!({ "is_done": true }))
        .to_request();
    let update_resp = test::call_service(&app, update_req).await;

    assert_eq!(update_resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(update_resp).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "todo not found");
}

#[actix_web::test]
async fn test_delete_todo() {
    let state = create_test_state();
    let token = seed_and_login(&state, "Test User", "test@example.com").await;
    let app = test::init_service(create_app(state)).await;

    let create_req = test::TestRequest::post()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "Temporary task" }))
        .to_request();
    let create_resp = test::call_service(&app, create_req).await;
    let created: serde_json::Value = test::read_body_json(create_resp).await;
    let todo_id = created["id"].as_str().unwrap().to_string();

    let delete_req = test::TestRequest::delete()
        .uri(&format!("/api/v1/todos/{}", todo_id))
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let delete_resp = test::call_service(&app, delete_req).await;

    assert_eq!(delete_resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(delete_resp).await;
    assert_eq!(body["message"], "Todo deleted successfully");

    let list_req = test::TestRequest::get()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let list_resp = test::call_service(&app, list_req).await;
    let list_body: serde_json::Value = test::read_body_json(list_resp).await;
    assert!(list_body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_delete_other_users_todo_not_found() {
    let state = create_test_state();
    let alice_token = seed_and_login(&state, "Alice", "alice@example.com").await;
    let bob_token = seed_and_login(&state, "Bob", "bob@example.com").await;
    let app = test::init_service(create_app(state)).await;

    let create_req = test::TestRequest::post()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", alice_token)))
        .set_json(serde_json::json!({ "name": "Alice task" }))
        .to_request();
    let create_resp = test::call_service(&app, create_req).await;
    let created: serde_json::Value = test::read_body_json(create_resp).await;
    let todo_id = created["id"].as_str().unwrap().to_string();

    let delete_req = test::TestRequest::delete()
        .uri(&format!("/api/v1/todos/{}", todo_id))
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", bob_token)))
        .to_request();
    let delete_resp = test::call_service(&app, delete_req).await;
    assert_eq!(delete_resp.status(), 404);

    // The owner still sees it
    let list_req = test::TestRequest::get()
        .uri("/api/v1/todos")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", alice_token)))
        .to_request();
    let list_resp = test::call_service(&app, list_req).await;
    let list_body: serde_json::Value = test::read_body_json(list_resp).await;
    assert_eq!(list_body.as_array().unwrap().len(), 1);
}
