//! Calculation endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        calculation::{AverageEmissionsDto, CalculateDto, CalculationDto, CalculationResultDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::calculation::CalculationService,
    },
};

/// OpenAPI tag for calculation endpoints
pub static CALCULATION_TAG: &str = "calculation";

/// Mean daily emissions across all stored calculations
///
/// Returns the fallback of 3.2 kg CO₂e while nothing has been stored.
#[utoipa::path(
    get,
    path = "/api/average-emissions",
    tag = CALCULATION_TAG,
    responses(
        (status = 200, description = "Success when computing the average", body = AverageEmissionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_average_emissions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let calculation_service = CalculationService::new(&state.db);

    let average_daily = calculation_service.mean_daily_emissions().await?;

    Ok((StatusCode::OK, Json(AverageEmissionsDto { average_daily })))
}

/// Calculate and store the emissions of a commute
///
/// Returns the stored calculation's ID with its totals, a comparison against the updated
/// average and recommendations for the submitted habits.
#[utoipa::path(
    post,
    path = "/api/calculate",
    tag = CALCULATION_TAG,
    request_body = CalculateDto,
    responses(
        (status = 200, description = "Success when storing the calculation", body = CalculationResultDto),
        (status = 400, description = "Invalid distance or habit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload.map_err(ValidationError::from)?;

    let calculation_service = CalculationService::new(&state.db);
    let result = calculation_service.calculate(input).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// List every stored calculation
#[utoipa::path(
    get,
    path = "/api/calculations",
    tag = CALCULATION_TAG,
    responses(
        (status = 200, description = "Success when listing calculations", body = Vec<CalculationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_calculations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let calculation_service = CalculationService::new(&state.db);

    let calculations = calculation_service.list_all().await?;

    Ok((StatusCode::OK, Json(calculations)))
}
