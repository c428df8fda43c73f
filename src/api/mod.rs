pub mod handlers;

use axum::http::Method;

use crate::routing::{RouteTable, RoutingError};
use self::handlers::*;

/// Build the route table for the public API.
pub fn routes() -> Result<RouteTable, RoutingError> {
    let mut table = RouteTable::new();
    table
        .register("/", Method::GET, get_root)?
        .register("/api/users", Method::GET, get_users)?
        .register("/health", Method::GET, get_health)?;
    Ok(table)
}
