//! Test configuration constants for the email client.
//!
//! These are placeholder values, not real credentials.

/// API key the test email client authenticates with.
pub static TEST_EMAIL_API_KEY: &str = "re_test_key";

/// Sender address configured on the test email client.
pub static TEST_EMAIL_FROM: &str = "Calculadora Ambiental <calculadora@example.com>";

/// Message ID returned by the mock email endpoint on success.
pub static TEST_EMAIL_ID: &str = "4ef9a417-02e9-4d39-ad75-9611e0fcc33c";
