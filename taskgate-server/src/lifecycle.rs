//! Process lifecycle: bind, serve, and graceful shutdown.

use crate::server::{ServerError, ServerState, ServiceInfo, build_router};
use std::net::SocketAddr;
use std::sync::Arc;
use taskgate_core::agent::AgentFactory;
use taskgate_core::config::GatewayConfig;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

/// A configured but not yet listening gateway.
pub struct Gateway<F: AgentFactory> {
    config: GatewayConfig,
    state: Arc<ServerState<F>>,
}

impl<F> Gateway<F>
where
    F: AgentFactory + 'static,
{
    pub fn new(config: GatewayConfig, factory: F) -> Self {
        let info = ServiceInfo {
            title: config.title.clone(),
            version: config.version.clone(),
        };
        Self {
            config,
            state: Arc::new(ServerState::new(factory, info)),
        }
    }

    /// Binds the listener and starts serving in the background.
    pub async fn start(self) -> Result<RunningGateway, ServerError> {
        let addr = self.config.bind;
        info!(%addr, title = self.config.title.as_str(), "Starting agent gateway");

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;

        let app = build_router(self.state);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });
        info!(addr = %local_addr, "REST server ready to accept connections");

        Ok(RunningGateway {
            local_addr,
            shutdown: shutdown_tx,
            task,
        })
    }
}

/// Handle to a serving gateway.
pub struct RunningGateway {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningGateway {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn stop(self) -> Result<(), ServerError> {
        let _ = self.shutdown.send(());
        self.task.await??;
        info!("Shutting down agent gateway");
        Ok(())
    }
}
