//! Emissions pipeline errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Precondition violations in the emissions pipeline. Always answered with 500.
#[derive(Error, Debug)]
pub enum EmissionsError {
    /// Population mean is zero, negative or not finite. The store never reports such a
    /// mean, so reaching this means the fallback was bypassed.
    #[error("Cannot compare against a population mean of {0}; the mean must be positive and finite")]
    InvalidPopulationMean(f64),
}

impl IntoResponse for EmissionsError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
