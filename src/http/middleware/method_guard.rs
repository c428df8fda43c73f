//! Method Guard Middleware.
//! Restricts a route to a single HTTP method.

use axum::{
    extract::{Request, State},
    handler::Handler,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{any, MethodRouter},
};

use crate::http::response::plain_text;

/// Body of the 405 response.
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed";

/// Rejects any request whose method is not exactly `allowed`.
///
/// The comparison is on the method token as transmitted, so `get` and `HEAD`
/// are both rejected by a `GET` guard. On a match the request is forwarded
/// untouched and the inner response is returned as-is.
pub async fn method_guard(
    State(allowed): State<Method>,
    req: Request,
    next: Next,
) -> Response {
    if *req.method() != allowed {
        tracing::debug!(
            method = %req.method(),
            allowed = %allowed,
            path = %req.uri().path(),
            "Method not allowed"
        );
        return plain_text(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_BODY);
    }

    next.run(req).await
}

/// Wrap `handler` so it only runs for `allowed`.
///
/// The handler is mounted for every method and the guard does the filtering,
/// which keeps the rejection response uniform instead of axum's built-in 405.
pub fn guard<H, T>(allowed: Method, handler: H) -> MethodRouter
where
    H: Handler<T, ()>,
    T: 'static,
{
    any(handler).layer(middleware::from_fn_with_state(allowed, method_guard))
}
