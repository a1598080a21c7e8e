//! Tests for the calculate endpoint.

use approx::assert_abs_diff_eq;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use ecocalc::{
    model::{
        calculation::CalculateDto,
        habit::{HydrationHabit, PackagingHabit, TransportMethod},
    },
    server::controller::calculation::calculate,
};
use sea_orm::EntityTrait;

use super::*;

fn dto(distance: f64, transport_method: TransportMethod) -> CalculateDto {
    CalculateDto {
        distance,
        transport_method,
        hydration_habit: HydrationHabit::PlasticBottle,
        packaging_habit: PackagingHabit::AluminumFoil,
    }
}

/// Expect 200 with totals, comparison and recommendations for a valid submission
#[tokio::test]
async fn success_for_valid_submission() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_calculation(3.2)
        .build()
        .await?;

    let result = calculate(
        State(test.into_app_state()),
        Ok(Json(dto(5.0, TransportMethod::CarSolo))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["calculationId"], 2);
    let daily = body["dailyEmissions"].as_f64().unwrap();
    assert_abs_diff_eq!(daily, 1.86, epsilon = 1e-9);
    assert_abs_diff_eq!(body["weeklyEmissions"].as_f64().unwrap(), daily * 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body["yearlyEmissions"].as_f64().unwrap(), daily * 180.0, epsilon = 1e-9);
    let average = body["averageDaily"].as_f64().unwrap();
    assert_abs_diff_eq!(average, (3.2 + 1.86) / 2.0, epsilon = 1e-9);
    assert!(body["percentBelowAverage"].as_f64().unwrap() > 0.0);
    assert_eq!(body["recommendations"]["home"].as_array().unwrap().len(), 4);
    assert_eq!(body["recommendations"]["school"].as_array().unwrap().len(), 7);

    Ok(())
}

/// Expect the minimum daily total for a zero-distance walking commute with reusable habits
#[tokio::test]
async fn success_for_zero_distance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let input = CalculateDto {
        distance: 0.0,
        transport_method: TransportMethod::Walking,
        hydration_habit: HydrationHabit::SteelBottle,
        packaging_habit: PackagingHabit::ZeroWaste,
    };
    let resp = calculate(State(test.into_app_state()), Ok(Json(input)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_abs_diff_eq!(body["dailyEmissions"].as_f64().unwrap(), 0.01, epsilon = 1e-9);

    Ok(())
}

/// Expect 400 and no stored calculation for a negative distance
#[tokio::test]
async fn bad_request_for_negative_distance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = calculate(
        State(test.into_app_state()),
        Ok(Json(dto(-1.0, TransportMethod::Train))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let calculations = entity::prelude::Calculation::find().all(&test.db).await?;
    assert!(calculations.is_empty());

    Ok(())
}

/// Expect 500 when required database tables are not present
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = calculate(
        State(test.into_app_state()),
        Ok(Json(dto(5.0, TransportMethod::Train))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
