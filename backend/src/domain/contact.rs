//! Contact form relay.
//!
//! Validates a visitor's submission, composes a notification email and hands
//! it to the [`MailSender`] port. Nothing is persisted and delivery is not
//! retried.

use std::sync::Arc;

use async_trait::async_trait;
use maud::{Markup, html};
use mockable::Env;
use serde_json::json;
use tracing::{error, info};

use crate::domain::Error;
use crate::domain::ports::{
    ContactRelay, DeliveryReceipt, MailSender, MailSenderError, OutgoingEmail,
};

/// Sender mailbox of every notification.
pub const CONTACT_SENDER: &str = "Contact Form <onboarding@resend.dev>";
/// Recipient used when `CONTACT_EMAIL` is unset.
pub const DEFAULT_RECIPIENT: &str = "llockhartlifecoaching@gmail.com";
/// Environment variable naming the recipient.
pub const CONTACT_EMAIL_ENV: &str = "CONTACT_EMAIL";
/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

/// Validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

impl ContactSubmission {
    /// Validate raw fields. Missing or blank fields are listed in the error
    /// details under `missing`.
    ///
    /// # Examples
    /// ```
    /// use coaching_site::domain::ContactSubmission;
    ///
    /// let err = ContactSubmission::parse(Some("Ada"), None, Some(" ")).expect_err("invalid");
    /// assert_eq!(err.message(), "Missing required fields");
    /// ```
    pub fn parse(
        name: Option<&str>,
        email: Option<&str>,
        message: Option<&str>,
    ) -> Result<Self, Error> {
        match (present(name), present(email), present(message)) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name: name.to_owned(),
                email: email.to_owned(),
                message: message.to_owned(),
            }),
            (name, email, message) => {
                let missing: Vec<&str> = [("name", name), ("email", email), ("message", message)]
                    .into_iter()
                    .filter_map(|(field, value)| value.is_none().then_some(field))
                    .collect();
                Err(Error::invalid_request("Missing required fields")
                    .with_details(json!({ "missing": missing })))
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn html_body(&self) -> Markup {
        html! {
            div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;" {
                h2 style="color: #333; border-bottom: 2px solid #eee; padding-bottom: 10px;" {
                    "New Contact Form Submission"
                }
                div style="margin: 20px 0;" {
                    p style="margin: 10px 0;" { strong { "Name:" } " " (self.name) }
                    p style="margin: 10px 0;" { strong { "Email:" } " " (self.email) }
                    p style="margin: 10px 0;" { strong { "Message:" } }
                    div style="background: #f9f9f9; padding: 15px; border-left: 4px solid #007cba; margin: 10px 0;" {
                        @for (index, line) in self.message.split('\n').enumerate() {
                            @if index > 0 { br; }
                            (line)
                        }
                    }
                }
                hr style="margin: 20px 0; border: none; border-top: 1px solid #eee;";
                p style="color: #666; font-size: 12px;" {
                    "This message was sent from the website contact form."
                }
            }
        }
    }

    /// Compose the notification for `recipient`.
    pub fn to_email(&self, recipient: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: CONTACT_SENDER.to_owned(),
            to: vec![recipient.to_owned()],
            subject: format!("New Contact Form Submission from {}", self.name),
            reply_to: self.email.clone(),
            html: self.html_body().into_string(),
        }
    }
}

/// Relays validated submissions through the mail provider.
pub struct ContactRelayService<M: ?Sized, E> {
    mailer: Arc<M>,
    env: E,
}

impl<M: ?Sized, E> ContactRelayService<M, E> {
    pub fn new(mailer: Arc<M>, env: E) -> Self {
        Self { mailer, env }
    }
}

impl<M, E> ContactRelayService<M, E>
where
    M: MailSender + ?Sized,
    E: Env,
{
    fn recipient(&self) -> String {
        self.env
            .string(CONTACT_EMAIL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RECIPIENT.to_owned())
    }
}

#[async_trait]
impl<M, E> ContactRelay for ContactRelayService<M, E>
where
    M: MailSender + ?Sized,
    E: Env + Send + Sync,
{
    /// The provider error is logged and replaced by a generic internal error.
    async fn relay(&self, submission: &ContactSubmission) -> Result<DeliveryReceipt, Error> {
        let email = submission.to_email(&self.recipient());
        let result = match self.env.string(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
            Some(api_key) => self.mailer.send(&api_key, &email).await,
            None => Err(MailSenderError::misconfigured(format!("{API_KEY_ENV} is not set"))),
        };
        match result {
            Ok(receipt) => {
                info!(receipt_id = %receipt.id, "contact notification delivered");
                Ok(receipt)
            }
            Err(cause) => {
                error!(error = %cause, "contact notification delivery failed");
                Err(Error::internal("Failed to send email"))
            }
        }
    }
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
