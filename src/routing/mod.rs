//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouteTable::register(path, method, handler)
//!     → handler wrapped by the method guard
//!     → into_router() freezes the table as an axum Router
//!
//! Per request:
//!     axum path dispatch → method guard → handler
//! ```
//!
//! # Design Decisions
//! - No process-wide registration; the table is an explicit value
//! - One allowed method per path, fixed at registration
//! - Deterministic: same request always hits the same route

pub mod router;

pub use router::{Route, RouteTable, RoutingError};
