// Exposed as a library so the integration tests can drive create_app

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
