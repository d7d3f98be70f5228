//! Sanity outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `ContentSource`
//! port against the Sanity query API.

mod dto;
mod http_source;

pub use http_source::{SanityEndpoint, SanityHttpSource};
