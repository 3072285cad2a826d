use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Machine-readable error codes exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidCredentials,
    EmailAlreadyExists,
    AlreadyExists,
    NotFound,
    InvalidId,
    Invalid,
    WeakPassword,
    ValidationError,
    Unauthorized,
    Forbidden,
    Conflict,
    InternalError,
    BadRequest,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidId => "INVALID_ID",
            ErrorCode::Invalid => "INVALID",
            ErrorCode::WeakPassword => "WEAK_PASSWORD",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed field of a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl ToString, message: impl ToString) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Closed taxonomy of domain failures.
///
/// Each variant fixes its code and HTTP status. Errors are built once at the
/// failure site and travel unchanged to the HTTP boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Email {0} already registered")]
    EmailAlreadyExists(String),

    #[error("{0} already registered")]
    AlreadyExists(String),

    #[error("{}", not_found_message(.resource, .id))]
    NotFound {
        resource: String,
        id: Option<String>,
    },

    #[error("{0}")]
    InvalidId(String),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    WeakPassword(String),

    #[error("Validation failed")]
    Validation(Vec<FieldIssue>),

    #[error("{0}")]
    FailedValidation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    /// Unclassified collaborator failure. Rendered as a generic 500.
    #[error("{0}")]
    Internal(String),
}

fn not_found_message(resource: &str, id: &Option<String>) -> String {
    match id {
        Some(id) => format!("{} with id {} not found", resource, id),
        None => format!("{} not found", resource),
    }
}

impl AppError {
    pub fn invalid_credentials() -> Self {
        AppError::InvalidCredentials("Invalid credentials".to_string())
    }

    pub fn not_found(resource: impl ToString) -> Self {
        AppError::NotFound {
            resource: resource.to_string(),
            id: None,
        }
    }

    pub fn not_found_with_id(resource: impl ToString, id: impl ToString) -> Self {
        AppError::NotFound {
            resource: resource.to_string(),
            id: Some(id.to_string()),
        }
    }

    pub fn invalid_id() -> Self {
        AppError::InvalidId("Invalid resource ID".to_string())
    }

    pub fn unauthorized(message: impl ToString) -> Self {
        AppError::Unauthorized(message.to_string())
    }

    pub fn forbidden() -> Self {
        AppError::Forbidden("Forbidden".to_string())
    }

    pub fn internal(message: impl ToString) -> Self {
        AppError::Internal(message.to_string())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            AppError::EmailAlreadyExists(_) => ErrorCode::EmailAlreadyExists,
            AppError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::Invalid(_) => ErrorCode::Invalid,
            AppError::WeakPassword(_) => ErrorCode::WeakPassword,
            AppError::Validation(_) | AppError::FailedValidation(_) => ErrorCode::ValidationError,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::Forbidden(_) => ErrorCode::Forbidden,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// HTTP status for this error. `None` means 500.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::InvalidCredentials(_) | AppError::Unauthorized(_) => Some(401),
            AppError::Forbidden(_) => Some(403),
            AppError::NotFound { .. } => Some(404),
            AppError::EmailAlreadyExists(_) | AppError::AlreadyExists(_) | AppError::Conflict(_) => {
                Some(409)
            }
            AppError::InvalidId(_)
            | AppError::Invalid(_)
            | AppError::WeakPassword(_)
            | AppError::Validation(_)
            | AppError::FailedValidation(_)
            | AppError::BadRequest(_) => Some(400),
            AppError::Internal(_) => None,
        }
    }

    /// Wire-safe projection: message and code, plus field issues for validation failures.
    pub fn to_object(&self) -> ErrorObject {
        ErrorObject {
            message: self.to_string(),
            code: self.code(),
            errors: match self {
                AppError::Validation(issues) => Some(issues.clone()),
                _ => None,
            },
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Serialized form of an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub message: String,
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldIssue>>,
}
