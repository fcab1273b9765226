//! Custom Axum extractors
//!
//! Path ids are integer surrogate keys. Malformed ids reject with the
//! standard JSON error envelope instead of axum's plain-text default.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a paste id from the path
pub struct PastePath(pub i32);

impl<S> FromRequestParts<S> for PastePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "paste_id" }))?;

        let paste_id = parse_id(&raw, "paste_id")?;
        Ok(Self(paste_id))
    }
}

/// Extract and validate a `(paste_id, comment_id)` pair from the path
pub struct CommentPath {
    pub paste_id: i32,
    pub comment_id: i32,
}

impl<S> FromRequestParts<S> for CommentPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((paste_raw, comment_raw)): Path<(String, String)> =
            Path::from_request_parts(parts, state).await.map_err(|_| {
                ApiError::Validation(ValidationError::Empty { field: "comment_id" })
            })?;

        Ok(Self {
            paste_id: parse_id(&paste_raw, "paste_id")?,
            comment_id: parse_id(&comment_raw, "comment_id")?,
        })
    }
}

fn parse_id(raw: &str, field: &'static str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field,
            reason: "must be an integer id",
        })
    })
}
