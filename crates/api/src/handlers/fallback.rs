//! Router-level fallbacks so unmatched requests still get the JSON envelope.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// No route matches the path.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {method} {uri}"))
}

/// The path matches a route that does not accept this method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
