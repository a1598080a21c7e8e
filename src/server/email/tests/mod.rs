
use ecocalc_test_utils::prelude::*;

use crate::server::email::{EmailClient, EmailMessage};

fn test_client(api_url: &str) -> EmailClient {
    EmailClient::builder()
        .api_url(api_url)
        .api_key(TEST_EMAIL_API_KEY)
        .from_address(TEST_EMAIL_FROM)
        .build()
        .unwrap()
}

fn test_message() -> EmailMessage {
    EmailMessage {
        from: TEST_EMAIL_FROM.to_string(),
        to: vec!["ada@example.com".to_string()],
        subject: "Tu Informe Ambiental - Ada".to_string(),
        html: "<p>Hola</p>".to_string(),
    }
}
