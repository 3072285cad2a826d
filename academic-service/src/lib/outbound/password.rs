use async_trait::async_trait;
use auth::PasswordHasher;

use crate::domain::auth::ports::PasswordService;
use crate::domain::shared::AppError;

/// Argon2id adapter for [`PasswordService`].
///
/// Hashing runs on the blocking pool so request workers are not stalled.
#[derive(Clone, Default)]
pub struct Argon2PasswordService {
    hasher: PasswordHasher,
}

impl Argon2PasswordService {
    pub fn new(hasher: PasswordHasher) -> Self {
        Self { hasher }
    }
}

#[async_trait]
impl PasswordService for Argon2PasswordService {
    async fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let hasher = self.hasher.clone();
        let plaintext = plaintext.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(AppError::internal)?
            .map_err(AppError::internal)
    }

    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, AppError> {
        let hasher = self.hasher.clone();
        let plaintext = plaintext.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash))
            .await
            .map_err(AppError::internal)?
            .map_err(AppError::internal)
    }
}
