//! Tests for the get_average_emissions endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use ecocalc::server::controller::calculation::get_average_emissions;

use super::*;

/// Expect the fallback average before anything has been stored
#[tokio::test]
async fn success_with_fallback_for_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_average_emissions(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["averageDaily"].as_f64(), Some(3.2));

    Ok(())
}

/// Expect the mean of stored daily emissions
#[tokio::test]
async fn success_with_mean_of_stored_calculations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_calculation(1.0)
        .with_mock_calculation(2.0)
        .with_mock_calculation(6.0)
        .build()
        .await?;

    let resp = get_average_emissions(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let body = read_json(resp).await;
    assert_eq!(body["averageDaily"].as_f64(), Some(3.0));

    Ok(())
}

/// Expect 500 when required database tables are not present
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_average_emissions(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
