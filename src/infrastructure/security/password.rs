// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with a per-call random salt; the digest is a self-contained PHC
/// string embedding salt and cost parameters. Hashing is deliberately slow,
/// so both operations run on the blocking pool. Neither plaintext nor digest
/// is ever logged.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    /// A malformed stored digest and a plain mismatch both come back as the
    /// same unauthorized error; verification never panics on bad input.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || -> Result<(), ApplicationError> {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("invalid credentials"))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashing_the_same_password_twice_differs() {
        let hasher = Argon2PasswordHasher;
        let first = hasher.hash("secret").await.unwrap();
        let second = hasher.hash("secret").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn verify_round_trips_and_rejects_wrong_guess() {
        let hasher = Argon2PasswordHasher;
        let digest = hasher.hash("secret").await.unwrap();
        assert!(hasher.verify("secret", &digest).await.is_ok());
        assert!(hasher.verify("not-secret", &digest).await.is_err());
    }

    #[tokio::test]
    async fn malformed_digest_is_rejected_without_panicking() {
        let hasher = Argon2PasswordHasher;
        let err = hasher.verify("secret", "not-a-phc-string").await;
        assert!(matches!(err, Err(ApplicationError::Unauthorized(_))));
    }
}
