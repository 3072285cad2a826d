use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Identity asserted by a token: the account identifier and its email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPayload {
    pub id: String,
    pub email: String,
}

impl TokenPayload {
    pub fn new(id: impl ToString, email: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
        }
    }
}

/// Signed claims carried by both access and refresh tokens.
///
/// `sub` holds the account identifier. `jti` is unique per signed token, so two
/// tokens issued for the same identity within the same second never collide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Account email
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// JWT ID (unique token identifier)
    pub jti: String,
}

impl Claims {
    /// Build claims for `payload` issued at `issued_at` and valid for `lifetime`.
    ///
    /// Returns `None` when the expiry cannot be represented.
    pub fn issue(payload: &TokenPayload, issued_at: DateTime<Utc>, lifetime: Duration) -> Option<Self> {
        let expiration = issued_at.checked_add_signed(lifetime)?;

        Some(Self {
            sub: payload.id.clone(),
            email: payload.email.clone(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Identity carried by these claims, without the registered claims.
    pub fn payload(&self) -> TokenPayload {
        TokenPayload {
            id: self.sub.clone(),
            email: self.email.clone(),
        }
    }
}

/// Minimal view of a token used when only its expiry is of interest.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct ExpiryClaim {
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_sets_registered_claims() {
        let now = Utc::now();
        let payload = TokenPayload::new("employee-1", "a@x.com");

        let claims = Claims::issue(&payload, now, Duration::minutes(15)).unwrap();

        assert_eq!(claims.sub, "employee-1");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn test_issue_generates_distinct_ids() {
        let now = Utc::now();
        let payload = TokenPayload::new("employee-1", "a@x.com");

        let first = Claims::issue(&payload, now, Duration::hours(1)).unwrap();
        let second = Claims::issue(&payload, now, Duration::hours(1)).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_issue_overflowing_lifetime() {
        let payload = TokenPayload::new("employee-1", "a@x.com");
        assert!(Claims::issue(&payload, DateTime::<Utc>::MAX_UTC, Duration::days(1)).is_none());
    }

    #[test]
    fn test_payload_round_trip() {
        let payload = TokenPayload::new("employee-1", "a@x.com");
        let claims = Claims::issue(&payload, Utc::now(), Duration::days(7)).unwrap();
        assert_eq!(claims.payload(), payload);
    }
}
