use auth::GeneratedTokens;
use auth::TokenPayload;

use crate::domain::employee::models::Employee;

/// Credentials submitted to the login use-case.
///
/// Deliberately unvalidated: a malformed email simply matches no account.
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: impl ToString, password: impl ToString) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Minimal public projection of the authenticated account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: String,
    pub email: String,
}

impl From<&Employee> for AccountSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            email: employee.email.as_str().to_string(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub tokens: GeneratedTokens,
    pub account: AccountSummary,
}

/// Identity the request gate attaches to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedEmployee {
    pub id: String,
    pub email: String,
}

impl From<TokenPayload> for AuthenticatedEmployee {
    fn from(payload: TokenPayload) -> Self {
        Self {
            id: payload.id,
            email: payload.email,
        }
    }
}
