//! Reqwest-backed Resend mail sender.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{DeliveryReceipt, MailSender, MailSenderError, OutgoingEmail};

/// Request body of the send-email call.
#[derive(Debug, Serialize)]
struct SendEmailDto<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    reply_to: &'a str,
    html: &'a str,
}

impl<'a> From<&'a OutgoingEmail> for SendEmailDto<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        Self {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            reply_to: &email.reply_to,
            html: &email.html,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SendEmailResponseDto {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Mail sender posting to the provider's send-email endpoint.
pub struct ResendHttpMailer {
    client: Client,
    endpoint: Url,
}

impl ResendHttpMailer {
    /// Build a mailer using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl MailSender for ResendHttpMailer {
    async fn send(
        &self,
        api_key: &str,
        email: &OutgoingEmail,
    ) -> Result<DeliveryReceipt, MailSenderError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&SendEmailDto::from(email))
            .send()
            .await
            .map_err(|error| MailSenderError::transport(error.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| MailSenderError::transport(error.to_string()))?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_receipt(body.as_ref())
    }
}

fn parse_receipt(body: &[u8]) -> Result<DeliveryReceipt, MailSenderError> {
    let decoded: SendEmailResponseDto = serde_json::from_slice(body).map_err(|error| {
        MailSenderError::decode(format!("invalid send response JSON: {error}"))
    })?;
    Ok(DeliveryReceipt { id: decoded.id })
}

fn map_status_error(status: StatusCode, body: &[u8]) -> MailSenderError {
    let detail = serde_json::from_slice::<ProviderErrorDto>(body)
        .ok()
        .and_then(|dto| dto.message.or(dto.name))
        .unwrap_or_else(|| String::from_utf8_lossy(body).chars().take(160).collect());
    let message = format!("status {}: {}", status.as_u16(), detail.trim());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => MailSenderError::misconfigured(message),
        _ if status.is_client_error() => MailSenderError::rejected(message),
        _ => MailSenderError::transport(message),
    }
}
