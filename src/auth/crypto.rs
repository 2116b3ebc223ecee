//! # Cryptographic Utilities
//!
//! Password digests and API token generation. Passwords are only ever
//! stored as Argon2id hashes; API tokens are opaque random strings compared
//! by equality against the `token` attribute of a user record.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;
use uuid::Uuid;

/// Errors from password hashing and verification.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hash a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, CryptoError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CryptoError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, CryptoError> {
    let parsed = PasswordHash::new(digest).map_err(|e| CryptoError::InvalidHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Generate a fresh API token.
pub fn generate_token() -> String {
    Uuid::new_v4().simple().to_string()
}
