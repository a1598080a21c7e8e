//! Errors for stored calculations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures looking up stored calculations.
#[derive(Error, Debug)]
pub enum CalculationError {
    /// No calculation exists with the given ID; answered with 404.
    #[error("Calculation ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for CalculationError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(calculation_id) => {
                tracing::debug!(calculation_id = %calculation_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Calculation not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
