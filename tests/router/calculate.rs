use approx::assert_abs_diff_eq;

use super::*;

/// Expect 200 for a valid form submission and the average to include it afterwards
#[tokio::test]
async fn calculates_and_updates_average() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/calculate",
            r#"{"distance":5,"transportMethod":"car-solo","hydrationHabit":"plastic-bottle","packagingHabit":"aluminum-foil"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["calculationId"], 1);
    assert_eq!(body["percentBelowAverage"].as_f64(), Some(0.0));

    let resp = app(&test)
        .oneshot(get_request("/api/average-emissions"))
        .await
        .unwrap();

    let average = read_json(resp).await["averageDaily"].as_f64().unwrap();
    assert_abs_diff_eq!(average, 1.86, epsilon = 1e-9);

    Ok(())
}

/// Expect 400 with an error message for a transport method outside the factor table
#[tokio::test]
async fn bad_request_for_unknown_transport_method() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/calculate",
            r#"{"distance":5,"transportMethod":"hoverboard","hydrationHabit":"plastic-bottle","packagingHabit":"aluminum-foil"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid request body"));

    Ok(())
}

/// Expect 400 for a negative distance
#[tokio::test]
async fn bad_request_for_negative_distance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/calculate",
            r#"{"distance":-3,"transportMethod":"train","hydrationHabit":"steel-bottle","packagingHabit":"zero-waste"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 rather than 422 for a missing field
#[tokio::test]
async fn bad_request_for_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/calculate",
            r#"{"distance":5,"transportMethod":"train"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a body without a JSON content type
#[tokio::test]
async fn bad_request_for_missing_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/calculate")
        .body(Body::from("distance=5"))
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a distance whose yearly total overflows
#[tokio::test]
async fn bad_request_for_overflowing_distance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/calculate",
            r#"{"distance":1e308,"transportMethod":"car-solo","hydrationHabit":"plastic-bottle","packagingHabit":"aluminum-foil"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("too large"));

    Ok(())
}
