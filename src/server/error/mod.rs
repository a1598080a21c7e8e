//! Error types for the ecocalc server.
//!
//! Domain-specific error enums live in submodules and are aggregated into [`Error`]. Every error
//! implements `IntoResponse` so handlers can return `Result<_, Error>` and let the variant pick
//! the HTTP status: validation failures answer 400, unknown records 404, and everything else is
//! logged and answered with a generic 500 body.

pub mod calculation;
pub mod config;
pub mod email;
pub mod emissions;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        calculation::CalculationError, config::ConfigError, email::EmailError,
        emissions::EmissionsError, validation::ValidationError,
    },
};

/// Main error type for the ecocalc server.
///
/// Uses `thiserror`'s `#[from]` so the `?` operator converts repository, service and
/// configuration errors automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed or out-of-range input supplied by the client.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Referenced calculation does not exist.
    #[error(transparent)]
    CalculationError(#[from] CalculationError),
    /// Emissions pipeline precondition violation.
    #[error(transparent)]
    EmissionsError(#[from] EmissionsError),
    /// Email provider failure.
    #[error(transparent)]
    EmailError(#[from] EmailError),
    /// Internal error indicating a bug or inconsistent stored data.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Maps errors to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For [`ValidationError`]
/// - 404 Not Found - For [`CalculationError::NotFound`]
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(err) => err.into_response(),
            Self::CalculationError(err) => err.into_response(),
            Self::EmissionsError(err) => err.into_response(),
            Self::EmailError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" body so storage or
/// provider details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
