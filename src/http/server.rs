//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Turn the route table into an axum Router
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a bound listener until told to stop

use axum::{http::Method, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::routing::RouteTable;

/// HTTP server serving a fixed route table.
pub struct HttpServer {
    router: Router,
    routes: Vec<(String, Method)>,
}

impl HttpServer {
    /// Create a new HTTP server for `routes` with the given configuration.
    pub fn new(config: &ServerConfig, routes: RouteTable) -> Self {
        let bindings = routes
            .routes()
            .map(|r| (r.path().to_string(), r.method().clone()))
            .collect();

        let router = Self::build_router(config, routes);
        Self {
            router,
            routes: bindings,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, routes: RouteTable) -> Router {
        routes
            .into_router()
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server on `listener` until `shutdown` fires.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        for (path, method) in &self.routes {
            tracing::info!(path = %path, method = %method, "Route registered");
        }
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router, for in-process dispatch.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Registered `(path, method)` bindings in registration order.
    pub fn routes(&self) -> &[(String, Method)] {
        &self.routes
    }
}
