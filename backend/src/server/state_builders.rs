//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use mockable::DefaultEnv;
use tracing::info;

use crate::domain::ContactRelayService;
use crate::domain::ports::{ContactRelay, ContentSource};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::resend::ResendHttpMailer;
use crate::outbound::sanity::SanityHttpSource;

use super::ServerConfig;

fn build_content_source(config: &ServerConfig) -> std::io::Result<Arc<dyn ContentSource>> {
    let source = SanityHttpSource::new(&config.sanity, config.request_timeout)
        .map_err(|error| std::io::Error::other(format!("content source setup failed: {error}")))?;
    info!(url = %source.query_url(), "content store configured");
    Ok(Arc::new(source))
}

fn build_contact_relay(config: &ServerConfig) -> std::io::Result<Arc<dyn ContactRelay>> {
    let mailer = ResendHttpMailer::new(config.mail_endpoint.clone(), config.request_timeout)
        .map_err(|error| std::io::Error::other(format!("mail sender setup failed: {error}")))?;
    Ok(Arc::new(ContactRelayService::new(Arc::new(mailer), DefaultEnv::new())))
}

/// Build the HTTP state backed by the real content store and mail provider.
///
/// # Errors
///
/// Returns [`std::io::Error`] when an HTTP client cannot be constructed.
pub fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let ports = HttpStatePorts {
        content: build_content_source(config)?,
        contact: build_contact_relay(config)?,
    };
    Ok(HttpState::new(ports, config.identity.clone()))
}

#[cfg(test)]
mod tests {
    //! Wiring of the production adapters.
    use super::*;
    use std::time::Duration;

    use rstest::rstest;
    use url::Url;

    use crate::domain::SiteIdentity;
    use crate::outbound::sanity::SanityEndpoint;

    fn config() -> ServerConfig {
        ServerConfig {
            bind_addr: "127.0.0.1:0".parse().expect("literal parses"),
            sanity: SanityEndpoint {
                project_id: "rb1epwnp".to_owned(),
                dataset: "production".to_owned(),
                api_version: "2024-01-01".to_owned(),
                use_cdn: false,
            },
            request_timeout: Duration::from_secs(1),
            mail_endpoint: Url::parse("https://api.resend.com/emails").expect("literal parses"),
            identity: SiteIdentity {
                name: "Lydia Lockhart".to_owned(),
                description: "Child life coaching".to_owned(),
            },
        }
    }

    #[rstest]
    fn http_state_builds_with_process_environment() {
        let state = build_http_state(&config()).expect("adapters build");
        assert_eq!(state.identity.name, "Lydia Lockhart");
    }
}
