use async_trait::async_trait;
use auth::GeneratedTokens;

use crate::domain::auth::models::AuthenticatedEmployee;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginResponse;
use crate::domain::shared::AppError;
use crate::domain::shared::Either;

/// Port for session use-cases and per-request token checks.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate credentials and issue a token pair.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No matching account or password mismatch
    /// * `Internal` - Lookup, password comparison or signing failed
    async fn login(&self, command: LoginCommand) -> Either<AppError, LoginResponse>;

    /// Exchange a refresh token for a brand-new token pair.
    ///
    /// # Errors
    /// * `Unauthorized` - Token missing, revoked, expired or invalid
    async fn refresh(&self, refresh_token: &str) -> Either<AppError, GeneratedTokens>;

    /// Revoke a bearer token, whether or not it would verify.
    ///
    /// # Errors
    /// * `BadRequest` - Token is blank
    async fn logout(&self, token: &str) -> Either<AppError, ()>;

    /// Resolve the identity behind an access token.
    ///
    /// # Errors
    /// * `Unauthorized` - Token revoked, expired or invalid
    /// * `Internal` - Verification could not run
    async fn authenticate(&self, token: &str) -> Either<AppError, AuthenticatedEmployee>;
}

/// Credential hashing and comparison.
///
/// Implementations may be CPU-heavy; callers await them.
#[async_trait]
pub trait PasswordService: Send + Sync + 'static {
    async fn hash(&self, plaintext: &str) -> Result<String, AppError>;

    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, AppError>;
}

/// Set of revoked raw token strings shared by every request.
///
/// Once `revoke` has returned, every later `is_revoked` for the same token
/// must observe it until the entry is purged after its expiry.
#[async_trait]
pub trait RevocationStore: Send + Sync + 'static {
    /// Add `token`; `expires_at` is its `exp` claim when one could be read.
    async fn revoke(&self, token: &str, expires_at: Option<i64>) -> Result<(), AppError>;

    async fn is_revoked(&self, token: &str) -> Result<bool, AppError>;

    /// Drop entries whose expiry is strictly before `now`. Returns how many were removed.
    async fn purge_expired(&self, now: i64) -> Result<usize, AppError>;
}
