//! Mock email provider endpoints.
//!
//! The endpoints are registered with the mockito server and verify they were called the
//! expected number of times.

use mockito::Mock;

use crate::{constant::TEST_EMAIL_ID, TestContext};

impl TestContext {
    pub fn email<'a>(&'a mut self) -> EmailFixtures<'a> {
        EmailFixtures { setup: self }
    }
}

pub struct EmailFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> EmailFixtures<'a> {
    /// Create a mock `POST /emails` endpoint that accepts the message.
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint answering `200 {"id": TEST_EMAIL_ID}`
    pub fn create_email_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/emails")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "id": TEST_EMAIL_ID }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /emails` endpoint that rejects the message with `status`.
    pub fn create_failing_email_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/emails")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "statusCode": status,
                    "name": "validation_error",
                    "message": "Mock provider rejected the message",
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create()
    }
}
