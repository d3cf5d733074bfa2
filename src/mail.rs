use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::json;

/// Mail transport collaborator: delivers one message and returns the
/// provider's message id.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        sender: &str,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String>;
}

/// Transactional mail via Brevo's v3 API.
pub struct BrevoMailer {
    client: reqwest::Client,
    api_key: String,
}

const BREVO_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

impl BrevoMailer {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl Mailer for BrevoMailer {
    async fn send(
        &self,
        sender: &str,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String> {
        let payload = json!({
            "sender": { "email": sender },
            "to": [{ "email": recipient }],
            "subject": subject,
            "textContent": body
        });

        let response = self
            .client
            .post(BREVO_ENDPOINT)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .context("Failed to reach the Brevo API")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "(no body)".to_string());
            bail!("Brevo API error: {status} - {text}");
        }

        let reply: serde_json::Value = response
            .json()
            .await
            .context("Failed to decode the Brevo reply")?;

        Ok(reply["messageId"].as_str().unwrap_or_default().to_string())
    }
}
