//! Stateless JWT operations:
//! - Access and refresh token issuance
//! - Signature, expiry, and issuer verification
//!
//! Session tracking lives elsewhere. The refresh token store is consulted
//! by the authentication service, never by the issuer itself.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
