//! Resend outbound adapter.
//!
//! Thin HTTP implementation of the `MailSender` port.

mod http_mailer;

pub use http_mailer::ResendHttpMailer;
