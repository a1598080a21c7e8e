//! Email provider errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failures talking to the transactional email provider.
///
/// Delivery failures during registration are not surfaced to the client as errors; they are
/// logged and reported through the `emailSent` flag instead.
#[derive(Error, Debug)]
pub enum EmailError {
    /// Builder was missing a required setting.
    #[error("Email client is missing required setting: {0}")]
    MissingSetting(&'static str),
    /// Provider answered with a non-2xx status.
    #[error("Email provider rejected the message with status {status}: {body}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, usually the provider's error description
        body: String,
    },
    /// Request could not be sent or the response could not be parsed.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl IntoResponse for EmailError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
