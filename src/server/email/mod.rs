//! HTTP client for the transactional email provider.
//!
//! Reports are delivered through a Resend-compatible API: a single `POST {api_url}/emails`
//! authenticated with a bearer key. The client is cheap to clone and is shared through
//! [`AppState`](crate::server::model::app::AppState).

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::server::error::email::EmailError;

/// Outgoing email as accepted by the provider's `/emails` endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct EmailMessage {
    /// Sender in `Name <address>` or bare address form
    pub from: String,
    /// Recipient addresses
    pub to: Vec<String>,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Client for the provider's send endpoint
#[derive(Clone, Debug)]
pub struct EmailClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl EmailClient {
    /// Creates a new [`EmailClientBuilder`]
    pub fn builder() -> EmailClientBuilder {
        EmailClientBuilder::default()
    }

    /// Sender address used for every report
    pub fn from_address(&self) -> &str {
        &self.from
    }

    /// Sends an email through the provider.
    ///
    /// # Returns
    /// - `Ok(String)` - Provider-assigned message ID
    /// - `Err(EmailError::Rejected)` - Provider answered with a non-2xx status
    /// - `Err(EmailError::Request)` - Request failed or the response could not be parsed
    pub async fn send(&self, message: &EmailMessage) -> Result<String, EmailError> {
        let url = format!("{}/emails", self.api_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let sent: SendEmailResponse = response.json().await?;

        Ok(sent.id)
    }
}

/// Builder for [`EmailClient`]
#[derive(Default)]
pub struct EmailClientBuilder {
    api_url: Option<String>,
    api_key: Option<String>,
    from: Option<String>,
}

impl EmailClientBuilder {
    /// Base URL of the provider API, without the `/emails` path
    pub fn api_url(mut self, api_url: &str) -> Self {
        self.api_url = Some(api_url.trim_end_matches('/').to_string());
        self
    }

    /// Bearer key sent with every request
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Sender in `Name <address>` or bare address form
    pub fn from_address(mut self, from: &str) -> Self {
        self.from = Some(from.to_string());
        self
    }

    /// Builds the [`EmailClient`]
    ///
    /// Fails with [`EmailError::MissingSetting`] if any setting was not provided.
    pub fn build(self) -> Result<EmailClient, EmailError> {
        let api_url = self.api_url.ok_or(EmailError::MissingSetting("api_url"))?;
        let api_key = self.api_key.ok_or(EmailError::MissingSetting("api_key"))?;
        let from = self.from.ok_or(EmailError::MissingSetting("from_address"))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("ecocalc/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(EmailClient {
            client,
            api_url,
            api_key,
            from,
        })
    }
}
