//! Credential hashing for email/password accounts. Hashes are argon2id PHC
//! strings, so parameters and salt travel with the stored value.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("could not hash password: {0}")]
    Hash(password_hash::Error),
    #[error("stored credential is not a valid hash: {0}")]
    Malformed(password_hash::Error),
}

pub fn hash(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(PasswordError::Hash)
}

/// `Ok(false)` for a wrong password; `Err` only when `stored` cannot be used.
pub fn verify(plain: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(PasswordError::Malformed)?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Malformed(e)),
    }
}
