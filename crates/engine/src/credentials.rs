//! Password hashing.
//!
//! Passwords are stored as Argon2id PHC strings (`$argon2id$v=19$...`), which
//! embed the salt and parameters needed to verify them later.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};

use crate::{EngineError, ResultEngine};

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> ResultEngine<String> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
        .map_err(|err| EngineError::Credentials(err.to_string()))?;
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| EngineError::Credentials(err.to_string()))
}

/// Returns `true` if `password` matches the stored `hash`.
///
/// A malformed stored hash is an error, not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> ResultEngine<bool> {
    let parsed =
        PasswordHash::new(hash).map_err(|err| EngineError::Credentials(err.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(EngineError::Credentials(err.to_string())),
    }
}
