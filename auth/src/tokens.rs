use chrono::Duration;
use chrono::Utc;

use crate::jwt::claims::ExpiryClaim;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenPayload;

/// Secrets and lifetimes for the two token classes.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_lifetime: Duration,
    pub refresh_lifetime: Duration,
}

/// Access/refresh token pair produced by a successful login or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Outcome of verifying a presented token.
///
/// Only `Valid` should ever be treated as authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerification {
    Valid(Claims),
    Expired(String),
    Invalid(String),
}

impl TokenVerification {
    /// Verified identity, if the token was valid.
    pub fn payload(&self) -> Option<TokenPayload> {
        match self {
            TokenVerification::Valid(claims) => Some(claims.payload()),
            TokenVerification::Expired(_) | TokenVerification::Invalid(_) => None,
        }
    }
}

/// Issues and verifies access and refresh tokens.
///
/// Each class has its own secret and lifetime: an access token never verifies
/// as a refresh token and vice versa.
pub struct TokenService {
    access: JwtHandler,
    refresh: JwtHandler,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            access: JwtHandler::new(config.access_secret.as_bytes()),
            refresh: JwtHandler::new(config.refresh_secret.as_bytes()),
            access_lifetime: config.access_lifetime,
            refresh_lifetime: config.refresh_lifetime,
        }
    }

    /// Sign `payload` once per token class.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed or the configured lifetime overflows
    pub fn generate_tokens(&self, payload: &TokenPayload) -> Result<GeneratedTokens, JwtError> {
        let access_token = Self::sign(&self.access, payload, self.access_lifetime)?;
        let refresh_token = Self::sign(&self.refresh, payload, self.refresh_lifetime)?;

        Ok(GeneratedTokens {
            access_token,
            refresh_token,
        })
    }

    /// Verify `token` against the access secret.
    ///
    /// # Errors
    /// * `Unexpected` - Verification could not be performed
    pub fn verify_access_token(&self, token: &str) -> Result<TokenVerification, JwtError> {
        Self::verify(&self.access, token)
    }

    /// Verify `token` against the refresh secret.
    ///
    /// # Errors
    /// * `Unexpected` - Verification could not be performed
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenVerification, JwtError> {
        Self::verify(&self.refresh, token)
    }

    /// Read the `exp` claim without checking the signature.
    ///
    /// Used to bound how long a revoked token needs to be remembered.
    pub fn peek_expiry(&self, token: &str) -> Option<i64> {
        self.access
            .decode_unverified::<ExpiryClaim>(token)
            .ok()
            .map(|claim| claim.exp)
    }

    fn sign(
        handler: &JwtHandler,
        payload: &TokenPayload,
        lifetime: Duration,
    ) -> Result<String, JwtError> {
        let claims = Claims::issue(payload, Utc::now(), lifetime).ok_or_else(|| {
            JwtError::EncodingFailed("token lifetime overflows the expiry claim".to_string())
        })?;

        handler.encode(&claims)
    }

    fn verify(handler: &JwtHandler, token: &str) -> Result<TokenVerification, JwtError> {
        match handler.decode::<Claims>(token) {
            Ok(claims) => Ok(TokenVerification::Valid(claims)),
            Err(e @ JwtError::TokenExpired) => Ok(TokenVerification::Expired(e.to_string())),
            Err(JwtError::InvalidToken(reason)) => Ok(TokenVerification::Invalid(reason)),
            Err(e) => Err(e),
        }
    }
}
