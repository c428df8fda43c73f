use axum::response::Response;
use serde::Serialize;

use crate::http::response::{write_json, ResponseError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub res: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: &'static str,
    pub age: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub live: bool,
    #[serde(rename = "errorcounts")]
    pub error_counts: u32,
}

pub fn greeting() -> Greeting {
    Greeting {
        res: "Welcome to root route",
    }
}

pub fn users() -> [User; 2] {
    [
        User { name: "Abir", age: 33 },
        User { name: "Babai", age: 23 },
    ]
}

pub fn health_reports() -> [HealthReport; 2] {
    [
        HealthReport { live: true, error_counts: 20 },
        HealthReport { live: false, error_counts: 1200 },
    ]
}

/// Write `payload` for `route`, logging the cause if encoding fails.
///
/// The writer's 500 response is passed through unchanged.
fn respond<T>(route: &'static str, payload: &T) -> Result<Response, ResponseError>
where
    T: Serialize + ?Sized,
{
    write_json(payload).inspect_err(|e| {
        tracing::error!(route, error = %e, "Failed to write JSON response");
    })
}

pub async fn get_root() -> Result<Response, ResponseError> {
    respond("/", &greeting())
}

pub async fn get_users() -> Result<Response, ResponseError> {
    respond("/api/users", &users())
}

pub async fn get_health() -> Result<Response, ResponseError> {
    respond("/health", &health_reports())
}
