use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(
    name = "taskgate",
    version,
    about = "Runs an autonomous agent per request behind a REST API"
)]
pub struct Cli {
    /// Gateway configuration file (defaults to config/gateway.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// REST API bind address (overrides config if specified)
    #[arg(long)]
    pub addr: Option<SocketAddr>,

    /// Agent (LLM) configuration file, read on every agent run
    #[arg(long)]
    pub agent_config: Option<String>,
}
