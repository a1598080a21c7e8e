//! Configuration errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required variable is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
