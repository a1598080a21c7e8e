//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/average-emissions` - Mean daily emissions across stored calculations
/// - `POST /api/calculate` - Calculate, store and compare a commute
/// - `GET /api/calculations` - List stored calculations
/// - `POST /api/register-student` - Register a student and email their report
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, email_client };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "EcoCalc", description = "School commute CO₂e calculator API"), tags(
        (name = controller::calculation::CALCULATION_TAG, description = "Emission calculation API routes"),
        (name = controller::student::STUDENT_TAG, description = "Student registration API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::calculation::get_average_emissions))
        .routes(routes!(controller::calculation::calculate))
        .routes(routes!(controller::calculation::get_calculations))
        .routes(routes!(controller::student::register_student))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
