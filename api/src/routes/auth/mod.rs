//! Login, logout, and token refresh endpoints
//!
//! The refresh token travels in an `HttpOnly` cookie so browser scripts
//! can never read it. Non-browser clients may send it in the JSON body
//! instead; the cookie always wins when both are present.

pub mod login;
pub mod logout;
pub mod refresh;

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    web, HttpRequest,
};

use crate::dto::auth::RefreshTokenRequest;

/// Cookie name carrying the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Builds the HttpOnly cookie that carries the refresh token
pub(crate) fn refresh_token_cookie(token: &str, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(REFRESH_TOKEN_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// Builds a removal cookie that clears the refresh token on the client
pub(crate) fn clear_refresh_token_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(REFRESH_TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish();
    cookie.make_removal();
    cookie
}

/// Pulls the refresh token from the cookie, falling back to the JSON body
pub(crate) fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Option<String> {
    if let Some(cookie) = req.cookie(REFRESH_TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }
    body.map(|json| json.into_inner().refresh_token)
}
