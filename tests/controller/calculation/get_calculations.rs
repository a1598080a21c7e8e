//! Tests for the get_calculations endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use ecocalc::server::controller::calculation::get_calculations;

use super::*;

/// Expect an empty list before anything has been stored
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_calculations(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    Ok(())
}

/// Expect stored calculations with their owning student and kebab-case habits
#[tokio::test]
async fn success_with_stored_calculations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_calculation(1.0)
        .build()
        .await?;
    let student_model = test.student().insert_mock_student("ada@example.com").await?;
    test.calculation()
        .insert_mock_calculation_for_student(student_model.id, 2.0)
        .await?;

    let resp = get_calculations(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let body = read_json(resp).await;
    let calculations = body.as_array().unwrap();
    assert_eq!(calculations.len(), 2);
    assert!(calculations[0]["studentId"].is_null());
    assert_eq!(calculations[1]["studentId"], student_model.id);
    assert_eq!(calculations[0]["transportMethod"], "car-solo");
    assert_eq!(calculations[0]["hydrationHabit"], "plastic-bottle");
    assert_eq!(calculations[0]["packagingHabit"], "aluminum-foil");

    Ok(())
}
