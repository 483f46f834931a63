//! Domain error to HTTP response mapping

use std::collections::HashMap;

use actix_web::HttpResponse;
use te_core::errors::{AuthError, DomainError, TokenError};
use validator::ValidationErrors;

use crate::dto::ErrorResponse;

/// Picks the status code and error payload for a failed service call
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::EmailNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                "email_not_found".to_string(),
                "No Matching Email".to_string(),
            )),
            AuthError::PasswordMismatch => HttpResponse::Unauthorized().json(ErrorResponse::new(
                "password_mismatch".to_string(),
                "Passwords Don't Match".to_string(),
            )),
            AuthError::UserNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                "user_not_found".to_string(),
                "User not found".to_string(),
            )),
            AuthError::UserAlreadyExists => HttpResponse::Conflict().json(ErrorResponse::new(
                "user_already_exists".to_string(),
                "User already exists".to_string(),
            )),
            AuthError::InsufficientPermissions => {
                HttpResponse::Forbidden().json(ErrorResponse::new(
                    "insufficient_permissions".to_string(),
                    "Insufficient permissions".to_string(),
                ))
            }
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenExpired => HttpResponse::Forbidden().json(ErrorResponse::new(
                "token_expired".to_string(),
                "Token expired".to_string(),
            )),
            TokenError::InvalidTokenFormat => HttpResponse::Forbidden().json(ErrorResponse::new(
                "invalid_token_format".to_string(),
                "Invalid token format".to_string(),
            )),
            TokenError::InvalidSignature => HttpResponse::Forbidden().json(ErrorResponse::new(
                "invalid_signature".to_string(),
                "Invalid signature".to_string(),
            )),
            TokenError::InvalidRefreshToken => HttpResponse::Forbidden().json(ErrorResponse::new(
                "invalid_refresh_token".to_string(),
                "Invalid refresh token".to_string(),
            )),
            TokenError::TokenGenerationFailed => {
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    "token_generation_failed".to_string(),
                    "Failed to generate token".to_string(),
                ))
            }
        },
        DomainError::Validation { message } => HttpResponse::BadRequest().json(
            ErrorResponse::new("validation_error".to_string(), message),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found".to_string(),
            format!("{} not found", resource),
        )),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error".to_string(),
                "An internal server error occurred".to_string(),
            ))
        }
    }
}

/// Convert request body validation failures into a 400 with per-field details
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    log::warn!("Request validation failed: {:?}", errors);

    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    let response = ErrorResponse::new(
        "validation_error".to_string(),
        "Request validation failed".to_string(),
    )
    .with_details(details);

    HttpResponse::BadRequest().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::Auth(AuthError::EmailNotFound));
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn test_password_mismatch_maps_to_401() {
        let response = handle_domain_error(DomainError::Auth(AuthError::PasswordMismatch));
        assert_eq!(response.status(), 401);
    }

    #[test]
    fn test_invalid_refresh_token_maps_to_403() {
        let response = handle_domain_error(DomainError::Token(TokenError::InvalidRefreshToken));
        assert_eq!(response.status(), 403);
    }

    #[test]
    fn test_token_generation_failure_maps_to_500() {
        let response = handle_domain_error(DomainError::Token(TokenError::TokenGenerationFailed));
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::NotFound {
            resource: "todo".to_string(),
        });
        assert_eq!(response.status(), 404);
    }
}
