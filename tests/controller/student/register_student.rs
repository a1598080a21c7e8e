//! Tests for the register_student endpoint.
//!
//! Verifies that registration links the calculation, that email delivery failures are
//! reported through `emailSent` without failing the request, and that audit rows are only
//! written for delivered reports.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use ecocalc::{
    model::student::RegisterStudentDto,
    server::controller::student::register_student,
};
use sea_orm::EntityTrait;

use super::*;

fn dto(name: &str, email: &str, calculation_id: i32) -> RegisterStudentDto {
    RegisterStudentDto {
        name: name.to_string(),
        email: email.to_string(),
        calculation_id,
    }
}

/// Expect 200 with emailSent true and one audit row when the provider accepts the report
#[tokio::test]
async fn success_when_email_sent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_calculation(1.86)
        .with_email_endpoint(1)
        .build()
        .await?;

    let result = register_student(
        State(test.into_app_state()),
        Ok(Json(dto("Ada", "ada@example.com", 1))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["emailSent"], true);

    let email_reports = entity::prelude::EmailReport::find().all(&test.db).await?;
    assert_eq!(email_reports.len(), 1);
    assert_eq!(email_reports[0].calculation_id, 1);

    test.assert_mocks();

    Ok(())
}

/// Expect 200 with emailSent false and no audit row when the provider rejects the report
#[tokio::test]
async fn success_when_email_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_calculation(1.86)
        .with_failing_email_endpoint(503, 1)
        .build()
        .await?;

    let resp = register_student(
        State(test.into_app_state()),
        Ok(Json(dto("Ada", "ada@example.com", 1))),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["emailSent"], false);

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert_eq!(students.len(), 1);
    let email_reports = entity::prelude::EmailReport::find().all(&test.db).await?;
    assert!(email_reports.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect 404 and no student for an unknown calculation
#[tokio::test]
async fn not_found_for_unknown_calculation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_email_endpoint(0)
        .build()
        .await?;

    let result = register_student(
        State(test.into_app_state()),
        Ok(Json(dto("Ada", "ada@example.com", 99))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "Calculation not found");

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert!(students.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect 400 for an invalid email address
#[tokio::test]
async fn bad_request_for_invalid_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_calculation(1.86)
        .with_email_endpoint(0)
        .build()
        .await?;

    let result = register_student(
        State(test.into_app_state()),
        Ok(Json(dto("Ada", "ada.example.com", 1))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    test.assert_mocks();

    Ok(())
}

/// Expect 400 when the calculation is already registered to another student
#[tokio::test]
async fn bad_request_for_calculation_owned_by_other_student() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_email_endpoint(0)
        .build()
        .await?;
    let owner = test.student().insert_mock_student("ada@example.com").await?;
    test.calculation()
        .insert_mock_calculation_for_student(owner.id, 1.86)
        .await?;

    let result = register_student(
        State(test.into_app_state()),
        Ok(Json(dto("Grace", "grace@example.com", 1))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert_eq!(students.len(), 1);

    test.assert_mocks();

    Ok(())
}
