//! Application constants
//!
//! Single source of truth for paths and other constants.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Default gateway configuration file path
pub const GATEWAY_CONFIG_PATH: &str = "config/gateway.toml";

/// Default agent (LLM) configuration file path
pub const AGENT_CONFIG_PATH: &str = "config/config.toml";

/// Example agent configuration shipped with the repository
pub const AGENT_CONFIG_EXAMPLE_PATH: &str = "config/config.example.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Default REST bind address
pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));

/// Name reported by the root endpoint
pub const DEFAULT_TITLE: &str = "Taskgate API";

/// Upper bound on agent iterations when the config does not set one
pub const DEFAULT_MAX_STEPS: usize = 10;

pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are an autonomous assistant that solves the user's task in small steps.

Reply with exactly one JSON object per turn:
- {"action":"think","thought":"<what you worked out in this step>"} when more steps are needed
- {"action":"final","response":"<the complete answer for the user>"} when the task is done

Do not wrap the JSON in code fences."#;

/// User message appended after each intermediate step
pub const CONTINUE_PROMPT: &str =
    "Continue with the next step. Reply with a final action once the task is complete.";
