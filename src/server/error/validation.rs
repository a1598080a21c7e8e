//! Client input errors.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client input that failed schema or range checks. Always answered with 400.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Request body is not valid JSON or does not match the expected schema.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
    /// Distance below zero.
    #[error("Distance must be zero or greater, got {0}")]
    NegativeDistance(f64),
    /// Distance is NaN or infinite.
    #[error("Distance must be a finite number")]
    NonFiniteDistance,
    /// Distance so large that an emission total overflows.
    #[error("Distance {0} km is too large to compute emissions for")]
    DistanceTooLarge(f64),
    /// Name is empty after trimming.
    #[error("Name must not be empty")]
    EmptyName,
    /// Email address is not syntactically valid.
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),
    /// Calculation is already linked to a different student.
    #[error("Calculation ID {0} is already registered to another student")]
    CalculationAlreadyRegistered(i32),
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
