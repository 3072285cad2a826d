use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::employee::errors::EmailError;
use crate::domain::employee::errors::EmployeeIdError;
use crate::domain::employee::errors::NameError;
use crate::domain::employee::errors::PasswordPolicyError;
use crate::domain::shared::errors::FieldIssue;

/// Employee aggregate entity.
///
/// Employees are the accounts that log in and administer student records.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: EmployeeName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    /// Generate a new time-ordered employee ID.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse an employee ID from string.
    ///
    /// # Errors
    /// * `Empty` - Blank input
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, EmployeeIdError> {
        if s.trim().is_empty() {
            return Err(EmployeeIdError::Empty);
        }

        Uuid::parse_str(s.trim())
            .map(EmployeeId)
            .map_err(|e| EmployeeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Employee display name, at least three characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeName(String);

impl EmployeeName {
    const MIN_LENGTH: usize = 3;

    pub fn new(name: String) -> Result<Self, NameError> {
        if name.trim().chars().count() < Self::MIN_LENGTH {
            return Err(NameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(name.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password that satisfies the minimum length policy.
///
/// Never persisted; the service hashes it before building an [`Employee`].
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword(String);

impl NewPassword {
    const MIN_LENGTH: usize = 6;

    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NewPassword(***)")
    }
}

/// Command to register a new employee with validated fields
#[derive(Debug)]
pub struct CreateEmployeeCommand {
    pub name: EmployeeName,
    pub email: EmailAddress,
    pub password: NewPassword,
    pub role: Option<String>,
}

impl CreateEmployeeCommand {
    pub const DEFAULT_ROLE: &'static str = "admin";

    /// Validate raw input, collecting every failing field.
    ///
    /// # Errors
    /// Returns one [`FieldIssue`] per invalid field.
    pub fn parse(
        name: String,
        email: String,
        password: String,
        role: Option<String>,
    ) -> Result<Self, Vec<FieldIssue>> {
        let name = EmployeeName::new(name);
        let email = EmailAddress::new(email);
        let password = NewPassword::new(password);

        match (name, email, password) {
            (Ok(name), Ok(email), Ok(password)) => Ok(Self {
                name,
                email,
                password,
                role,
            }),
            (name, email, password) => Err([
                name.err().map(FieldIssue::from),
                email.err().map(FieldIssue::from),
                password.err().map(FieldIssue::from),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}
