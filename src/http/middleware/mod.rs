//! Per-route request interceptors.

pub mod method_guard;

pub use method_guard::{guard, method_guard, METHOD_NOT_ALLOWED_BODY};
