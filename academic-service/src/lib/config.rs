use std::env;
use std::time::Duration as StdDuration;

use auth::parse_lifetime;
use auth::LifetimeError;
use auth::TokenConfig;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ACCESS_SECRET: &str = "access-secret";
pub const DEFAULT_REFRESH_SECRET: &str = "refresh-secret";
pub const DEFAULT_ACCESS_EXPIRES_IN: &str = "15m";
pub const DEFAULT_REFRESH_EXPIRES_IN: &str = "7d";

const DEVELOPMENT: &str = "development";
const PRODUCTION: &str = "production";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub revocation: RevocationConfig,
    pub run_mode: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_expires_in: String,
    pub refresh_expires_in: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RevocationConfig {
    /// Seconds between purges of expired revocations; 0 disables the sweeper.
    pub sweep_interval_secs: u64,
}

impl RevocationConfig {
    pub fn sweep_interval(&self) -> Option<StdDuration> {
        (self.sweep_interval_secs > 0).then(|| StdDuration::from_secs(self.sweep_interval_secs))
    }
}

/// Unprefixed environment source: `JWT__ACCESS_SECRET` overrides `jwt.access_secret`.
///
/// An empty prefix must not be set: it would only match variables starting with `__`.
fn environment() -> Environment {
    Environment::default().separator("__")
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Load(#[from] ConfigError),

    #[error("Invalid {key}: {source}")]
    InvalidLifetime {
        key: &'static str,
        #[source]
        source: LifetimeError,
    },

    #[error("{key} must be overridden in production")]
    DefaultSecret { key: &'static str },
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__ACCESS_SECRET, DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigurationError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| DEVELOPMENT.to_string());
        Self::load_with(run_mode, environment())
    }

    fn load_with(run_mode: String, environment: Environment) -> Result<Self, ConfigurationError> {
        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 3000)?
            .set_default("jwt.access_secret", DEFAULT_ACCESS_SECRET)?
            .set_default("jwt.refresh_secret", DEFAULT_REFRESH_SECRET)?
            .set_default("jwt.access_expires_in", DEFAULT_ACCESS_EXPIRES_IN)?
            .set_default("jwt.refresh_expires_in", DEFAULT_REFRESH_EXPIRES_IN)?
            .set_default("revocation.sweep_interval_secs", 300)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(environment)
            .set_override("run_mode", run_mode)?
            .build()?;

        Ok(configuration.try_deserialize()?)
    }

    pub fn is_development(&self) -> bool {
        self.run_mode == DEVELOPMENT
    }

    pub fn is_production(&self) -> bool {
        self.run_mode == PRODUCTION
    }

    /// Parse the configured lifetimes into a [`TokenConfig`].
    ///
    /// # Errors
    /// * `InvalidLifetime` - An expiry string does not follow `<n><unit>`
    pub fn token_config(&self) -> Result<TokenConfig, ConfigurationError> {
        let access_lifetime = parse_lifetime(&self.jwt.access_expires_in).map_err(|source| {
            ConfigurationError::InvalidLifetime {
                key: "jwt.access_expires_in",
                source,
            }
        })?;
        let refresh_lifetime = parse_lifetime(&self.jwt.refresh_expires_in).map_err(|source| {
            ConfigurationError::InvalidLifetime {
                key: "jwt.refresh_expires_in",
                source,
            }
        })?;

        Ok(TokenConfig {
            access_secret: self.jwt.access_secret.clone(),
            refresh_secret: self.jwt.refresh_secret.clone(),
            access_lifetime,
            refresh_lifetime,
        })
    }

    /// Refuse built-in secrets in production; warn about them elsewhere.
    ///
    /// # Errors
    /// * `DefaultSecret` - A secret still has its built-in value in production
    pub fn check_secrets(&self) -> Result<(), ConfigurationError> {
        let defaults = [
            ("jwt.access_secret", &self.jwt.access_secret, DEFAULT_ACCESS_SECRET),
            ("jwt.refresh_secret", &self.jwt.refresh_secret, DEFAULT_REFRESH_SECRET),
        ];

        for (key, value, default) in defaults {
            if value != default {
                continue;
            }
            if self.is_production() {
                return Err(ConfigurationError::DefaultSecret { key });
            }
            tracing::warn!(key, run_mode = %self.run_mode, "Using built-in default secret");
        }

        Ok(())
    }
}
