//! Student registration endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{RegisterStudentDto, RegisterStudentResponseDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::report::ReportService,
    },
};

/// OpenAPI tag for student endpoints
pub static STUDENT_TAG: &str = "student";

/// Register a student against a calculation and email them their report
///
/// Registration succeeds even if the email cannot be delivered; `emailSent` reports whether
/// the provider accepted it.
#[utoipa::path(
    post,
    path = "/api/register-student",
    tag = STUDENT_TAG,
    request_body = RegisterStudentDto,
    responses(
        (status = 200, description = "Student registered", body = RegisterStudentResponseDto),
        (status = 400, description = "Invalid name or email, or calculation already registered", body = ErrorDto),
        (status = 404, description = "Calculation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_student(
    State(state): State<AppState>,
    payload: Result<Json<RegisterStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload.map_err(ValidationError::from)?;

    let report_service = ReportService::new(&state.db, &state.email_client);
    let response = report_service.register_student(input).await?;

    Ok((StatusCode::OK, Json(response)))
}
