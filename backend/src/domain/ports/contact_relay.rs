//! Driving port for the contact endpoint.

use async_trait::async_trait;

use super::DeliveryReceipt;
use crate::domain::{ContactSubmission, Error};

/// Use-case relaying one validated contact submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Deliver the notification for `submission`.
    ///
    /// Failures surface as an internal [`Error`] with a client-safe message;
    /// the cause is logged, not returned.
    async fn relay(&self, submission: &ContactSubmission) -> Result<DeliveryReceipt, Error>;
}
