//! Admin password checking
//!
//! The configured admin password is either plain text or an Argon2id PHC
//! string produced by [`hash_password`].

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is invalid
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Config(format!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// The single server-side admin secret
#[derive(Clone)]
pub enum AdminPassword {
    Plain(String),
    Argon2(String),
}

impl AdminPassword {
    /// Interpret a configured value; PHC strings starting with `$argon2` are hashes
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        if value.starts_with("$argon2") {
            Self::Argon2(value.to_string())
        } else {
            Self::Plain(value.to_string())
        }
    }

    /// Check a submitted password
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify(&self, candidate: &str) -> Result<(), AppError> {
        let matches = match self {
            Self::Plain(expected) => expected == candidate,
            Self::Argon2(hash) => verify_password(candidate, hash)?,
        };

        if matches {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

impl std::fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("AdminPassword::Plain(..)"),
            Self::Argon2(_) => f.write_str("AdminPassword::Argon2(..)"),
        }
    }
}
