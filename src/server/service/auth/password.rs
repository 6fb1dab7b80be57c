//! Argon2id password hashing, run on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hashes a password into a PHC string with a random salt.
pub async fn hash_password(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::InternalError(format!("Failed to hash password: {e}")))
    })
    .await
    .map_err(|e| Error::InternalError(format!("Password hashing task failed: {e}")))?
}

/// Checks a password against a stored PHC string.
///
/// A stored hash that cannot be parsed is an internal error, not a failed match.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&password_hash).map_err(|e| {
            Error::InternalError(format!("Stored password hash is not a valid PHC string: {e}"))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(|e| Error::InternalError(format!("Password verification task failed: {e}")))?
}
