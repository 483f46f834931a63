//! Credential checks and the session lifecycle:
//! - Credential verification on login
//! - Access/refresh token issuance
//! - Refresh token tracking and revocation
//! - Access token renewal

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
