//! Environment configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the server listens on when `BIND_ADDRESS` is unset
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Resend API base URL
pub static DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com";
/// Sender used when `EMAIL_FROM` is unset
pub static DEFAULT_EMAIL_FROM: &str = "Calculadora Ambiental <calculadora@resend.dev>";

/// Server settings read from the environment
pub struct Config {
    /// `DATABASE_URL`, PostgreSQL connection string
    pub database_url: String,
    /// `RESEND_API_KEY`, bearer key for the email provider
    pub email_api_key: String,
    /// `EMAIL_API_URL`, base URL of the email provider
    pub email_api_url: String,
    /// `EMAIL_FROM`, sender of report emails
    pub email_from: String,
    /// `BIND_ADDRESS`, socket the HTTP server listens on
    pub bind_address: SocketAddr,
}

impl Config {
    /// Builds the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let bind_address = get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            email_api_key: require("RESEND_API_KEY")?,
            email_api_url: get("EMAIL_API_URL").unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_string()),
            email_from: get("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
            bind_address,
        })
    }
}
