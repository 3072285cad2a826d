//! Authentication utilities library
//!
//! Provides the authentication infrastructure used by the academic records backend:
//! - Password hashing (Argon2id)
//! - Bearer token signing and verification (HS256)
//! - Paired access/refresh token issuance with independent secrets and lifetimes
//!
//! The library knows nothing about HTTP or about the accounts it authenticates.
//! Services define their own ports and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Token Pairs
//! ```
//! use auth::{TokenConfig, TokenPayload, TokenService, TokenVerification};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(&TokenConfig {
//!     access_secret: "access_secret_at_least_32_bytes_long!".to_string(),
//!     refresh_secret: "refresh_secret_at_least_32_bytes_long".to_string(),
//!     access_lifetime: Duration::minutes(15),
//!     refresh_lifetime: Duration::days(7),
//! });
//!
//! let payload = TokenPayload::new("employee-1", "a@x.com");
//! let pair = tokens.generate_tokens(&payload).unwrap();
//!
//! match tokens.verify_access_token(&pair.access_token).unwrap() {
//!     TokenVerification::Valid(claims) => assert_eq!(claims.payload(), payload),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! ## Token Lifetimes
//! ```
//! use auth::parse_lifetime;
//! use chrono::Duration;
//!
//! assert_eq!(parse_lifetime("15m").unwrap(), Duration::minutes(15));
//! assert_eq!(parse_lifetime("7d").unwrap(), Duration::days(7));
//! ```

pub mod jwt;
pub mod password;
pub mod tokens;

// Re-export commonly used items
pub use jwt::parse_lifetime;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::LifetimeError;
pub use jwt::TokenPayload;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use tokens::GeneratedTokens;
pub use tokens::TokenConfig;
pub use tokens::TokenService;
pub use tokens::TokenVerification;
