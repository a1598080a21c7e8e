use super::*;

/// Expect every API route in the generated OpenAPI document
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    for path in [
        "/api/average-emissions",
        "/api/calculate",
        "/api/calculations",
        "/api/register-student",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {path}");
    }

    Ok(())
}
