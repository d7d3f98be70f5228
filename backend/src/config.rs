//! Site configuration loaded via OrthoConfig.
//!
//! Every key can be set with a `SITE_`-prefixed environment variable, e.g.
//! `SITE_BIND_ADDR` or `SITE_SANITY_PROJECT_ID`. Unset keys fall back to the
//! defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::domain::SiteIdentity;
use crate::outbound::sanity::SanityEndpoint;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PROJECT_ID: &str = "rb1epwnp";
const DEFAULT_DATASET: &str = "production";
const DEFAULT_API_VERSION: &str = "2024-01-01";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SITE_NAME: &str = "Lydia Lockhart";
const DEFAULT_SITE_DESCRIPTION: &str = "Child life coaching helping children and families build confidence, resilience and emotional wellbeing.";
const DEFAULT_MAIL_ENDPOINT: &str = "https://api.resend.com/emails";

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(String),
    #[error("invalid bind address `{value}`: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid mail endpoint `{value}`: {source}")]
    MailEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Values controlling the listener, content store, mail provider and site
/// identity.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SITE")]
pub struct SiteConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    pub sanity_project_id: Option<String>,
    pub sanity_dataset: Option<String>,
    /// Dated API version, e.g. `2024-01-01`.
    pub sanity_api_version: Option<String>,
    /// Query the edge cache instead of the live API.
    #[ortho_config(default = false)]
    pub sanity_use_cdn: bool,
    /// Timeout applied to every outbound HTTP request.
    pub request_timeout_secs: Option<u64>,
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    /// Send-email endpoint of the mail provider.
    pub mail_endpoint: Option<String>,
}

impl SiteConfig {
    /// Load from command-line arguments and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load().map_err(|error| ConfigError::Load(error.to_string()))
    }

    /// Parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| ConfigError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    pub fn sanity_endpoint(&self) -> SanityEndpoint {
        SanityEndpoint {
            project_id: self
                .sanity_project_id
                .clone()
                .unwrap_or_else(|| DEFAULT_PROJECT_ID.to_owned()),
            dataset: self
                .sanity_dataset
                .clone()
                .unwrap_or_else(|| DEFAULT_DATASET.to_owned()),
            api_version: self
                .sanity_api_version
                .clone()
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_owned()),
            use_cdn: self.sanity_use_cdn,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn identity(&self) -> SiteIdentity {
        SiteIdentity {
            name: self
                .site_name
                .clone()
                .unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned()),
            description: self
                .site_description
                .clone()
                .unwrap_or_else(|| DEFAULT_SITE_DESCRIPTION.to_owned()),
        }
    }

    /// Parsed mail provider endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MailEndpoint`] when the value is not a URL.
    pub fn mail_endpoint(&self) -> Result<Url, ConfigError> {
        let value = self.mail_endpoint.as_deref().unwrap_or(DEFAULT_MAIL_ENDPOINT);
        Url::parse(value).map_err(|source| ConfigError::MailEndpoint {
            value: value.to_owned(),
            source,
        })
    }
}
