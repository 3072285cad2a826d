use std::sync::Arc;

use async_trait::async_trait;
use auth::GeneratedTokens;
use auth::JwtError;
use auth::TokenPayload;
use auth::TokenService;
use auth::TokenVerification;
use tokio::sync::OnceCell;

use crate::domain::auth::models::AccountSummary;
use crate::domain::auth::models::AuthenticatedEmployee;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginResponse;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::PasswordService;
use crate::domain::auth::ports::RevocationStore;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::shared::AppError;
use crate::domain::shared::Either;

/// Plaintext behind the hash compared against when no account matches.
const UNKNOWN_ACCOUNT_PASSWORD: &str = "unknown-account-password";

/// Login, refresh, logout and access-token checks.
///
/// Composes the account lookup, the password service, the token codec and the
/// revocation store. Holds no per-session state of its own.
///
/// Logins for unknown emails still run one password comparison, against a
/// hash made once on first use, so both rejections cost the same.
pub struct AuthService<ER, PS, RS>
where
    ER: EmployeeRepository,
    PS: PasswordService,
    RS: RevocationStore,
{
    repository: Arc<ER>,
    passwords: Arc<PS>,
    revocations: Arc<RS>,
    tokens: Arc<TokenService>,
    unknown_account_hash: OnceCell<String>,
}

impl<ER, PS, RS> AuthService<ER, PS, RS>
where
    ER: EmployeeRepository,
    PS: PasswordService,
    RS: RevocationStore,
{
    pub fn new(
        repository: Arc<ER>,
        passwords: Arc<PS>,
        revocations: Arc<RS>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            repository,
            passwords,
            revocations,
            tokens,
            unknown_account_hash: OnceCell::new(),
        }
    }

    async fn sign_in(&self, command: LoginCommand) -> Result<LoginResponse, AppError> {
        let Some(employee) = self.repository.find_by_email(&command.email).await? else {
            let hash = self
                .unknown_account_hash
                .get_or_try_init(|| self.passwords.hash(UNKNOWN_ACCOUNT_PASSWORD))
                .await?;
            self.passwords.compare(&command.password, hash).await?;

            tracing::info!(reason = "unknown_account", "Login rejected");
            return Err(AppError::invalid_credentials());
        };

        let matches = self
            .passwords
            .compare(&command.password, &employee.password_hash)
            .await?;
        if !matches {
            tracing::info!(
                employee_id = %employee.id,
                reason = "password_mismatch",
                "Login rejected"
            );
            return Err(AppError::invalid_credentials());
        }

        let payload = TokenPayload::new(employee.id, employee.email.as_str());
        let tokens = self
            .tokens
            .generate_tokens(&payload)
            .map_err(AppError::internal)?;

        tracing::info!(employee_id = %employee.id, "Login succeeded");

        Ok(LoginResponse {
            tokens,
            account: AccountSummary::from(&employee),
        })
    }

    async fn reissue(&self, refresh_token: &str) -> Result<GeneratedTokens, AppError> {
        if refresh_token.trim().is_empty() {
            return Err(AppError::unauthorized("Refresh token is required"));
        }

        self.ensure_not_revoked(refresh_token).await?;
        let payload = verified(self.tokens.verify_refresh_token(refresh_token))?;

        // Refresh tokens are not single-use: the presented token stays valid.
        let tokens = self
            .tokens
            .generate_tokens(&payload)
            .map_err(AppError::internal)?;

        tracing::debug!(employee_id = %payload.id, "Token pair refreshed");
        Ok(tokens)
    }

    async fn revoke(&self, token: &str) -> Result<(), AppError> {
        if token.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Token is required for logout".to_string(),
            ));
        }

        let expires_at = self.tokens.peek_expiry(token);
        self.revocations.revoke(token, expires_at).await?;

        tracing::info!(expires_at = ?expires_at, "Token revoked");
        Ok(())
    }

    async fn identify(&self, token: &str) -> Result<AuthenticatedEmployee, AppError> {
        self.ensure_not_revoked(token).await?;
        verified(self.tokens.verify_access_token(token)).map(AuthenticatedEmployee::from)
    }

    async fn ensure_not_revoked(&self, token: &str) -> Result<(), AppError> {
        if self.revocations.is_revoked(token).await? {
            return Err(AppError::unauthorized("Token has been revoked"));
        }
        Ok(())
    }
}

/// Only a valid verification yields an identity; expired and invalid tokens
/// both collapse into `Unauthorized` carrying the reason.
fn verified(verification: Result<TokenVerification, JwtError>) -> Result<TokenPayload, AppError> {
    match verification.map_err(AppError::internal)? {
        TokenVerification::Valid(claims) => Ok(claims.payload()),
        TokenVerification::Expired(reason) | TokenVerification::Invalid(reason) => {
            Err(AppError::Unauthorized(reason))
        }
    }
}

#[async_trait]
impl<ER, PS, RS> AuthServicePort for AuthService<ER, PS, RS>
where
    ER: EmployeeRepository,
    PS: PasswordService,
    RS: RevocationStore,
{
    async fn login(&self, command: LoginCommand) -> Either<AppError, LoginResponse> {
        self.sign_in(command).await.into()
    }

    async fn refresh(&self, refresh_token: &str) -> Either<AppError, GeneratedTokens> {
        self.reissue(refresh_token).await.into()
    }

    async fn logout(&self, token: &str) -> Either<AppError, ()> {
        self.revoke(token).await.into()
    }

    async fn authenticate(&self, token: &str) -> Either<AppError, AuthenticatedEmployee> {
        self.identify(token).await.into()
    }
}
