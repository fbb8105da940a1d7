//! REST gateway that runs one autonomous agent per request.
//!
//! The [`Gateway`] lifecycle object owns the HTTP server; the router in
//! [`server`] can also be mounted directly for in-process testing.

pub mod cli;
pub mod lifecycle;
pub mod server;

pub use cli::Cli;
pub use lifecycle::{Gateway, RunningGateway};

use std::error::Error;
use std::path::Path;
use taskgate_core::config::{GatewayConfig, ensure_env_loaded, expand_path};
use taskgate_core::runtime::LlmAgentFactory;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    ensure_env_loaded();

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = GatewayConfig::load(config_path)?;
    if let Some(addr) = cli.addr {
        config = config.with_bind(addr);
    }
    if let Some(agent_config) = cli.agent_config.as_deref() {
        config = config.with_agent_config(expand_path(agent_config));
    }
    debug!(
        bind = %config.bind,
        agent_config = %config.agent_config.display(),
        "Configuration loaded"
    );

    let factory = LlmAgentFactory::new(config.agent_config.clone());
    let running = Gateway::new(config, factory).start().await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    running.stop().await?;
    Ok(())
}

pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
