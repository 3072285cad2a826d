use thiserror::Error;

use crate::domain::shared::errors::FieldIssue;
use crate::domain::shared::AppError;

/// Error for EmployeeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeIdError {
    #[error("Invalid resource ID")]
    Empty,

    #[error("Invalid resource ID: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for EmployeeName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must be at least {min} characters")]
    TooShort { min: usize },
}

/// Error for plaintext password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
}

impl From<EmployeeIdError> for AppError {
    fn from(err: EmployeeIdError) -> Self {
        AppError::InvalidId(err.to_string())
    }
}

impl From<EmailError> for FieldIssue {
    fn from(err: EmailError) -> Self {
        FieldIssue::new("email", err)
    }
}

impl From<NameError> for FieldIssue {
    fn from(err: NameError) -> Self {
        FieldIssue::new("name", err)
    }
}

impl From<PasswordPolicyError> for FieldIssue {
    fn from(err: PasswordPolicyError) -> Self {
        FieldIssue::new("password", err)
    }
}
