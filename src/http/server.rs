//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router from the ordered route groups
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Serve on a listener until the shutdown signal fires

use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::routing;

/// Application state injected into handlers. Read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

/// HTTP server for the routing showcase.
pub struct HttpServer {
    router: Router,
    config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: Arc::clone(&config),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        routing::build_routes()
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .with_state(state)
            .layer(middleware)
    }

    /// The router with all layers applied, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            max_body_bytes = self.config.limits.max_body_bytes,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
