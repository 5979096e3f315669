use std::sync::Arc;

use catalog_store::JsonFileStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Catalog HTTP server backed by a JSON file.
pub struct CatalogServer {
    config: ServerConfig,
}

impl CatalogServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handler state wired to the configured file store.
    pub fn state(&self) -> AppState {
        let store = JsonFileStore::new(&self.config.data_path)
            .with_atomic_writes(self.config.atomic_writes);
        AppState::new(Arc::new(store), &self.config.index_path)
            .with_serialized_writes(self.config.serialize_writes)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            data = %self.config.data_path.display(),
            "catalog server listening on {}",
            self.config.bind_addr
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
        let server = CatalogServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr.port(), 3000);
    }

    #[test]
    fn state_follows_config() {
        let config = ServerConfig {
            serialize_writes: true,
            index_path: "public/index.html".into(),
            ..Default::default()
        };
        let state = CatalogServer::new(config).state();
        assert!(state.serializes_writes());
        assert_eq!(state.index_path(), std::path::Path::new("public/index.html"));
    }

    #[test]
    fn router_builds() {
        let server = CatalogServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
