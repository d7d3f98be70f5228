//! Server-rendered coaching site.
//!
//! Pages are assembled from a headless content store and rendered to HTML;
//! a single JSON endpoint relays contact form submissions by email.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod views;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
