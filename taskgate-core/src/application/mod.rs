pub mod agent;
pub mod orchestrator;
