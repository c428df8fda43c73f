//! Route registration and router assembly.
//!
//! # Responsibilities
//! - Store `(path, allowed method, handler)` bindings in registration order
//! - Reject duplicate or malformed paths at registration time
//! - Compile the bindings into an axum `Router`, each behind a method guard
//!
//! # Design Decisions
//! - Built once at startup, immutable once turned into a `Router`
//! - Exact path matching; unmatched paths fall through to axum's 404

use axum::{
    handler::Handler,
    http::Method,
    routing::MethodRouter,
    Router,
};
use thiserror::Error;

use crate::http::middleware::guard;

/// Error type for route registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// The path is already bound to a handler.
    #[error("route already registered: {0}")]
    DuplicatePath(String),
    /// The path does not start with `/`.
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),
}

/// A single registered route.
pub struct Route {
    path: String,
    method: Method,
    handler: MethodRouter,
}

impl Route {
    /// The path this route is mounted on.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The only method this route accepts.
    pub fn method(&self) -> &Method {
        &self.method
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Ordered table of guarded routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `path`, accepting only `method`.
    pub fn register<H, T>(
        &mut self,
        path: impl Into<String>,
        method: Method,
        handler: H,
    ) -> Result<&mut Self, RoutingError>
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(RoutingError::InvalidPath(path));
        }
        if self.routes.iter().any(|r| r.path == path) {
            return Err(RoutingError::DuplicatePath(path));
        }

        let handler = guard(method.clone(), handler);
        self.routes.push(Route { path, method, handler });
        Ok(self)
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Compile the table into an axum router.
    pub fn into_router(self) -> Router {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, route| {
                router.route(&route.path, route.handler)
            })
    }
}
