//! Password hashing and verification via bcrypt.

use te_shared::config::PasswordConfig;

use crate::errors::{DomainError, DomainResult};

/// Service for hashing and verifying user passwords
///
/// The cost factor is fixed at construction so every hash produced by a
/// process carries the same work factor.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a new password hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password
    ///
    /// # Arguments
    ///
    /// * `plain` - The plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The bcrypt hash
    /// * `Err(DomainError)` - Hashing failed
    pub fn hash(&self, plain: &str) -> DomainResult<String> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    /// Verifies a plaintext password against a stored hash
    ///
    /// Fails closed: a malformed stored hash yields `false` rather than
    /// an error, so a corrupt record can never authenticate.
    ///
    /// # Arguments
    ///
    /// * `plain` - The plaintext password to check
    /// * `stored_hash` - The bcrypt hash on record
    ///
    /// # Returns
    ///
    /// `true` if the password matches, `false` otherwise
    pub fn verify(&self, plain: &str, stored_hash: &str) -> bool {
        bcrypt::verify(plain, stored_hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&PasswordConfig> for PasswordHasher {
    fn from(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }
}
