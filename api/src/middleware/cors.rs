//! Cross-origin policy assembly.
//!
//! Browser clients hold the access token in memory and rely on the
//! refresh token cookie, so credentialed cross-origin requests must be
//! allowed. Development uses a permissive policy; production restricts
//! origins to the configured list.

use actix_cors::Cors;
use te_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the application configuration.
///
/// An origin list of `["*"]` allows any origin (the development policy).
/// Otherwise only the configured origins are accepted.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default().max_age(config.max_age as usize);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        log::info!("Configuring permissive CORS policy");
        cors = cors.allow_any_origin();
    } else if config.allowed_origins.is_empty() {
        log::warn!("No CORS origins configured; cross-origin requests will be rejected");
    } else {
        for origin in &config.allowed_origins {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allowed_methods.iter().any(|method| method == "*") {
        cors = cors.allow_any_method();
    } else {
        cors = cors.allowed_methods(config.allowed_methods.iter().map(String::as_str));
    }

    if config.allowed_headers.iter().any(|header| header == "*") {
        cors = cors.allow_any_header();
    } else {
        cors = cors.allowed_headers(config.allowed_headers.iter().map(String::as_str));
    }

    // The refresh cookie rides on credentialed requests
    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
