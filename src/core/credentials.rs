//! Password hashing for user and staff accounts.
//!
//! Hashes are Argon2id PHC strings with a random per-password salt.

use crate::errors::{Error, Result};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

/// Hashes a plaintext password.
///
/// # Errors
/// Returns `Error::PasswordHash` if the hasher rejects the input.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash {
            message: e.to_string(),
        })
}

/// Checks a plaintext password against a stored PHC hash.
///
/// # Errors
/// Returns `Error::PasswordHash` if the stored hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| Error::PasswordHash {
        message: e.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() -> Result<()> {
        let hash = hash_password("@Password123")?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("@Password123"));
        assert!(verify_password("@Password123", &hash)?);
        assert!(!verify_password("@Password124", &hash)?);
        Ok(())
    }

    #[test]
    fn test_same_password_gets_different_salts() -> Result<()> {
        let first = hash_password("Admin123")?;
        let second = hash_password("Admin123")?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let result = verify_password("Admin123", "Admin123");
        assert!(matches!(result, Err(Error::PasswordHash { .. })));
    }
}
