//! Driven port for delivering outbound email through a provider.

use async_trait::async_trait;
use serde::Serialize;

use super::define_port_error;

/// Fully composed notification email handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Sender mailbox, e.g. `Contact Form <onboarding@resend.dev>`.
    pub from: String,
    /// Recipient mailboxes.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Address replies should go to.
    pub reply_to: String,
    /// HTML body.
    pub html: String,
}

/// Provider acknowledgement for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeliveryReceipt {
    /// Provider-assigned message identifier.
    pub id: String,
}

define_port_error! {
    /// Errors surfaced while handing email to the provider.
    pub enum MailSenderError {
        /// The provider could not be reached.
        Transport { message: String } =>
            "mail provider transport failed: {message}",
        /// The provider refused the message.
        Rejected { message: String } =>
            "mail provider rejected message: {message}",
        /// Credentials or endpoint are missing or invalid.
        Misconfigured { message: String } =>
            "mail provider misconfigured: {message}",
        /// The provider response could not be decoded.
        Decode { message: String } =>
            "mail provider response decode failed: {message}",
    }
}

/// Port for sending one email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Deliver `email`, authenticating with `api_key`.
    ///
    /// The key is passed per call because it is read from the environment at
    /// request time.
    async fn send(
        &self,
        api_key: &str,
        email: &OutgoingEmail,
    ) -> Result<DeliveryReceipt, MailSenderError>;
}

/// Fixture implementation accepting every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureMailSender;

#[async_trait]
impl MailSender for FixtureMailSender {
    async fn send(
        &self,
        _api_key: &str,
        _email: &OutgoingEmail,
    ) -> Result<DeliveryReceipt, MailSenderError> {
        Ok(DeliveryReceipt {
            id: "fixture".to_owned(),
        })
    }
}
