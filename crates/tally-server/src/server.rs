use std::sync::Arc;

use tokio::net::TcpListener;

use tally_chain::SealLimits;
use tally_sync::{HttpTransport, Node, SyncEngine};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Shared handler state: the node plus the engine that talks to peers.
#[derive(Clone)]
pub struct AppState {
    pub node: Arc<Node>,
    pub engine: Arc<SyncEngine<HttpTransport>>,
    pub seal_limits: SealLimits,
}

/// A Tally ledger node's HTTP server.
pub struct TallyServer {
    config: ServerConfig,
}

impl TallyServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the node and sync engine this server will expose.
    ///
    /// Mines the genesis block, so this blocks briefly at the configured
    /// difficulty.
    pub fn build_state(&self) -> ServerResult<AppState> {
        let node = Arc::new(Node::new(
            self.config.advertise_addr.clone(),
            self.config.difficulty,
        ));
        let transport = HttpTransport::new(self.config.peer_timeout)?;
        let seal_limits = match self.config.seal_timeout {
            Some(timeout) => SealLimits::with_timeout(timeout),
            None => SealLimits::unbounded(),
        };
        Ok(AppState {
            node,
            engine: Arc::new(SyncEngine::new(transport)),
            seal_limits,
        })
    }

    /// Start serving requests.
    pub async fn serve(self, state: AppState) -> ServerResult<()> {
        let app = build_router(state);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            bind = %self.config.bind_addr,
            advertise = %self.config.advertise_addr,
            difficulty = self.config.difficulty,
            "tally node listening"
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = TallyServer::new(ServerConfig::default());
        assert_eq!(server.config().difficulty, 2);
    }

    #[test]
    fn state_holds_mined_genesis() {
        let config = ServerConfig {
            difficulty: 1,
            ..ServerConfig::default()
        };
        let state = TallyServer::new(config).build_state().unwrap();
        assert_eq!(state.node.chain().height(), 1);
    }

    #[test]
    fn router_builds() {
        let config = ServerConfig {
            difficulty: 1,
            ..ServerConfig::default()
        };
        let server = TallyServer::new(config);
        let state = server.build_state().unwrap();
        let _router = build_router(state);
    }
}
