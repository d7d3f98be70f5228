//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactRelay, ContentSource};
use crate::domain::{PageAssembler, SiteIdentity};

/// Port implementations the HTTP adapter is built from.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub content: Arc<dyn ContentSource>,
    pub contact: Arc<dyn ContactRelay>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub pages: Arc<PageAssembler<dyn ContentSource>>,
    pub contact: Arc<dyn ContactRelay>,
    pub identity: Arc<SiteIdentity>,
}

impl HttpState {
    /// Construct state from ports and the configured site identity.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use coaching_site::domain::SiteIdentity;
    /// use coaching_site::domain::ports::{FixtureContentSource, FixtureMailSender};
    /// use coaching_site::domain::ContactRelayService;
    /// use coaching_site::inbound::http::state::{HttpState, HttpStatePorts};
    /// use mockable::DefaultEnv;
    ///
    /// let state = HttpState::new(
    ///     HttpStatePorts {
    ///         content: Arc::new(FixtureContentSource),
    ///         contact: Arc::new(ContactRelayService::new(Arc::new(FixtureMailSender), DefaultEnv::new())),
    ///     },
    ///     SiteIdentity {
    ///         name: "Lydia Lockhart".to_owned(),
    ///         description: "Child life coaching".to_owned(),
    ///     },
    /// );
    /// assert_eq!(state.identity.name, "Lydia Lockhart");
    /// ```
    pub fn new(ports: HttpStatePorts, identity: SiteIdentity) -> Self {
        let HttpStatePorts { content, contact } = ports;
        Self {
            pages: Arc::new(PageAssembler::new(content)),
            contact,
            identity: Arc::new(identity),
        }
    }
}
