//! Custom Axum extractors that report failures through [`AppError`].
//!
//! Axum's stock rejections answer with plain-text bodies; these wrappers keep
//! every failure inside the JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use trivia_core::types::DbId;

use crate::error::AppError;

/// JSON body extractor. A missing, non-JSON or ill-typed body is a bad request.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query-string extractor that never rejects. A query string that cannot be
/// deserialized (a repeated key, say) yields `T::default()`.
#[derive(Debug)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Ignoring malformed query string");
                Ok(Self(T::default()))
            }
        }
    }
}

/// Numeric `{id}` path segment. A non-numeric id cannot name a resource, so
/// it is reported as not found.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub DbId);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
        Ok(Self(id))
    }
}
