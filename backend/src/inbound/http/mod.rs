//! HTTP inbound adapter: server-rendered pages, the contact endpoint and
//! health probes.

pub mod cache_control;
pub mod contact;
pub mod error;
pub mod health;
pub mod pages;
pub mod state;

pub use error::{ApiResult, ErrorBody};
