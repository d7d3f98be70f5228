//! Domain types and services.
//!
//! Purpose: shape content store documents into page props and relay contact
//! form submissions, independent of HTTP and of the concrete store or mail
//! provider.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - ContentService: typed getters over the content store.
//! - PageAssembler: per-route content batches with all-or-nothing fallback.
//! - ContactRelayService: contact form validation and delivery.

pub mod contact;
pub mod content;
pub mod content_service;
pub mod error;
pub mod link;
pub mod metadata;
pub mod page_assembly;
pub mod ports;
pub mod queries;

pub use self::contact::{ContactRelayService, ContactSubmission};
pub use self::content_service::ContentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::link::LinkTarget;
pub use self::metadata::{OgType, PageMetadata, SiteIdentity};
pub use self::page_assembly::{
    BlogIndexProps, DetailProps, FaqProps, HomeProps, PageAssembler, PageOutcome, SiteChrome,
};
