//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

use crate::config::{ConfigError, SiteConfig};
use crate::domain::SiteIdentity;
use crate::outbound::sanity::SanityEndpoint;

/// Resolved settings the server and its adapters are built from.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) sanity: SanityEndpoint,
    pub(crate) request_timeout: Duration,
    pub(crate) mail_endpoint: Url,
    pub(crate) identity: SiteIdentity,
}

impl ServerConfig {
    /// Resolve defaults and parse addresses from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the bind address or mail endpoint is
    /// malformed.
    pub fn from_site_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: config.bind_addr()?,
            sanity: config.sanity_endpoint(),
            request_timeout: config.request_timeout(),
            mail_endpoint: config.mail_endpoint()?,
            identity: config.identity(),
        })
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
