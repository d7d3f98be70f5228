//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_relay;
mod content_source;
mod mail_sender;

#[cfg(test)]
pub use contact_relay::MockContactRelay;
pub use contact_relay::ContactRelay;

#[cfg(test)]
pub use content_source::MockContentSource;
pub use content_source::{ContentQuery, ContentSource, ContentSourceError, FixtureContentSource};
#[cfg(test)]
pub use mail_sender::MockMailSender;
pub use mail_sender::{
    DeliveryReceipt, FixtureMailSender, MailSender, MailSenderError, OutgoingEmail,
};
