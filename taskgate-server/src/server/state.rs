use taskgate_core::agent::AgentFactory;
use taskgate_core::orchestrator::RunService;

/// Name and version reported by `GET /`.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub title: String,
    pub version: String,
}

pub struct ServerState<F: AgentFactory> {
    service: RunService<F>,
    info: ServiceInfo,
}

impl<F: AgentFactory> ServerState<F> {
    pub fn new(factory: F, info: ServiceInfo) -> Self {
        Self {
            service: RunService::new(factory),
            info,
        }
    }

    pub fn service(&self) -> &RunService<F> {
        &self.service
    }

    pub fn info(&self) -> &ServiceInfo {
        &self.info
    }
}
