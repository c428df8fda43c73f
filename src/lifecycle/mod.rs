//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Start:
//!     Load config → Validate → Build route table → Bind listener → Serve
//!
//! Stop (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT or Shutdown::trigger → stop accepting → drain → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
