//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, timeout)
//!     → routing (path dispatch)
//!     → middleware/method_guard.rs (405 or forward)
//!     → api handler builds payload
//!     → response.rs (JSON 200 or 500)
//!     → Send to client
//! ```

pub mod middleware;
pub mod response;
pub mod server;

pub use response::{write_json, ResponseError};
pub use server::HttpServer;
