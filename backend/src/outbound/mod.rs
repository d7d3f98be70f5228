//! Outbound adapters implementing domain ports for external services.
//!
//! - **sanity**: content store queries over the Sanity HTTP API
//! - **resend**: notification email delivery over the Resend HTTP API
//!
//! Adapters are thin translators between domain types and provider wire
//! formats. They contain no business logic.

pub mod resend;
pub mod sanity;
