//! Application configuration module
//!
//! Provides the process configuration consumed at startup. Required values
//! are validated once, before any service is constructed, so a missing
//! signing secret stops the process instead of failing individual requests.

use std::fmt;

use thiserror::Error;

/// Default bcrypt cost factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;
/// Default allowed browser origin for CORS
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5173";
/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// Production switch; enables the `Secure` cookie attribute
    pub production: bool,
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Origin allowed to send credentialed requests
    pub client_origin: String,
    /// Listening port
    pub port: u16,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("production", &self.production)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("client_origin", &self.client_origin)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from process environment variables.
    ///
    /// | Variable | Required | Default |
    /// |---|---|---|
    /// | `JWT_SECRET` | yes | - |
    /// | `APP_ENV` / `NODE_ENV` | no | not production |
    /// | `DATABASE_URL` | no | in-memory store |
    /// | `CLIENT_ORIGIN` | no | `http://localhost:5173` |
    /// | `SERVER_PORT` | no | `3000` |
    /// | `BCRYPT_COST` | no | `10` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }

        let environment = lookup("APP_ENV").or_else(|| lookup("NODE_ENV"));
        builder = builder.production(environment.as_deref() == Some("production"));

        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }

        if let Some(origin) = lookup("CLIENT_ORIGIN") {
            builder = builder.client_origin(origin);
        }

        if let Some(port) = lookup("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port))?;
            builder = builder.port(port);
        }

        if let Some(cost) = lookup("BCRYPT_COST") {
            let parsed = cost
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("BCRYPT_COST", cost))?;
            builder = builder.bcrypt_cost(parsed);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                "BCRYPT_COST",
                self.bcrypt_cost.to_string(),
            ));
        }
        if !self.client_origin.starts_with("http://") && !self.client_origin.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(self.client_origin.clone()));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    production: bool,
    database_url: Option<String>,
    client_origin: Option<String>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Mark the deployment as production
    pub fn production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the allowed client origin
    pub fn client_origin(mut self, origin: impl Into<String>) -> Self {
        self.client_origin = Some(origin.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bcrypt cost factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            production: self.production,
            database_url: self.database_url,
            client_origin: self
                .client_origin
                .unwrap_or_else(|| DEFAULT_CLIENT_ORIGIN.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
