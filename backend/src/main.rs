//! Site entry-point: loads configuration, wires adapters and serves pages.

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use coaching_site::config::SiteConfig;
use coaching_site::inbound::http::health::HealthState;
use coaching_site::server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let site_config = SiteConfig::from_env().map_err(std::io::Error::other)?;
    let config = ServerConfig::from_site_config(&site_config).map_err(std::io::Error::other)?;
    info!(bind_addr = %config.bind_addr(), "starting server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
