use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Verification could not run at all (crypto backend failure).
    #[error("Token verification failed unexpectedly: {0}")]
    Unexpected(String),
}

/// Error for token lifetime strings such as `15m` or `7d`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifetimeError {
    #[error("Token lifetime is missing a numeric amount: '{0}'")]
    MissingAmount(String),

    #[error("Unknown token lifetime unit '{unit}' in '{value}' (expected s, m, h, d or w)")]
    UnknownUnit { value: String, unit: String },

    #[error("Token lifetime must be greater than zero: '{0}'")]
    Zero(String),

    #[error("Token lifetime is out of range: '{0}'")]
    OutOfRange(String),
}
