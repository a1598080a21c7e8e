//! Test utilities for creating AppState from a TestContext

use axum::{body::Body, http::Response};
use ecocalc::server::{email::EmailClient, model::app::AppState};
use ecocalc_test_utils::prelude::*;
use serde_json::Value;

/// Extension trait for TestContext to create AppState backed by the mock email provider
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let email_client = EmailClient::builder()
            .api_url(&self.email_api_url())
            .api_key(TEST_EMAIL_API_KEY)
            .from_address(TEST_EMAIL_FROM)
            .build()
            .expect("Failed to build email client");

        AppState {
            db: self.db.clone(),
            email_client,
        }
    }
}

/// Reads a response body as JSON
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
