//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::ShipAppState;
use super::router::{build_health_routes, build_ship_routes};
use crate::config::ShipyardConfig;
use crate::core::repository::ShipRepository;
use crate::core::service::ShipService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the shipyard HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_repository(InMemoryShipRepository::new())
///     .with_config(config)
///     .build()?;
/// ```
pub struct ServerBuilder {
    repository: Option<Arc<dyn ShipRepository>>,
    config: ShipyardConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            repository: None,
            config: ShipyardConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the ship repository (required)
    pub fn with_repository(mut self, repository: impl ShipRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Set the ship repository from an existing shared handle
    pub fn with_shared_repository(mut self, repository: Arc<dyn ShipRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_config(mut self, config: ShipyardConfig) -> Self {
        self.config = config;
        self
    }

    /// Add routes that sit next to the ship API
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// Merges health routes, ship routes and any custom routes, then wraps the
    /// whole app in a request tracing layer.
    pub fn build(mut self) -> Result<Router> {
        let repository = self
            .repository
            .take()
            .ok_or_else(|| anyhow::anyhow!("ShipRepository is required. Call .with_repository()"))?;

        self.config.validate()?;

        let state = ShipAppState {
            service: ShipService::new(repository),
            paging: self.config.paging,
        };

        let mut app = build_health_routes().merge(build_ship_routes(state));
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured `server.host:server.port` and stops on
    /// SIGTERM or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for a shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
