use super::*;

/// Expect 404 with an error body for an unknown calculation
#[tokio::test]
async fn not_found_for_unknown_calculation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_email_endpoint(0)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/register-student",
            r#"{"name":"Ada","email":"ada@example.com","calculationId":7}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "Calculation not found");

    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a non-integer calculation ID
#[tokio::test]
async fn bad_request_for_invalid_calculation_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_email_endpoint(0)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/register-student",
            r#"{"name":"Ada","email":"ada@example.com","calculationId":"one"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    test.assert_mocks();

    Ok(())
}

/// Expect the full calculate then register flow to deliver one report
#[tokio::test]
async fn registers_after_calculating() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_email_endpoint(1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/calculate",
            r#"{"distance":2.5,"transportMethod":"bicycle","hydrationHabit":"steel-bottle","packagingHabit":"zero-waste"}"#,
        ))
        .await
        .unwrap();
    let calculation_id = read_json(resp).await["calculationId"].as_i64().unwrap();

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/register-student",
            &format!(
                r#"{{"name":"Ada","email":"Ada@Example.com","calculationId":{}}}"#,
                calculation_id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["emailSent"], true);

    let resp = app(&test)
        .oneshot(get_request("/api/calculations"))
        .await
        .unwrap();
    let calculations = read_json(resp).await;
    assert!(calculations[0]["studentId"].is_number());

    test.assert_mocks();

    Ok(())
}
