//! Comment endpoints

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{delete, get},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Comment, CommentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{CommentPath, PastePath};
use crate::http::server::AppState;
use crate::models::CommentBody;

/// Create comment request
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub comment: String,
}

/// Comment response
#[derive(Serialize)]
pub struct CommentResponse {
    pub comment_id: i32,
    pub comment: String,
    pub paste_id: i32,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.comment_id,
            comment: c.comment,
            paste_id: c.paste_id,
        }
    }
}

/// List comments response envelope
#[derive(Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

/// GET /pastes/{paste_id}/comments - list comments for a paste
async fn list_comments(
    State(state): State<Arc<AppState>>,
    PastePath(paste_id): PastePath,
) -> Result<Json<CommentListResponse>, ApiError> {
    let comments = CommentRepo::new(&state.pool)
        .list_for_paste(paste_id)
        .await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    }))
}

/// POST /pastes/{paste_id}/comments - attach a comment to a paste
///
/// No existence check on the paste: a dangling id is rejected by the
/// foreign key and surfaces as a store error.
async fn create_comment(
    State(state): State<Arc<AppState>>,
    PastePath(paste_id): PastePath,
    Json(req): Json<CreateCommentRequest>,
) -> Result<StatusCode, ApiError> {
    let comment = CommentBody::new(&req.comment)?;

    CommentRepo::new(&state.pool)
        .create(paste_id, comment)
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /pastes/{paste_id}/comments/{comment_id} - delete one comment
///
/// Both ids must match the same row; anything else is a 404.
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    path: CommentPath,
) -> Result<Json<&'static str>, ApiError> {
    CommentRepo::new(&state.pool)
        .delete(path.paste_id, path.comment_id)
        .await?;

    Ok(Json("Comment was deleted"))
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/pastes/{paste_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/pastes/{paste_id}/comments/{comment_id}",
            delete(delete_comment),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_response_serializes_all_fields() {
        let response = CommentListResponse {
            comments: vec![CommentResponse {
                comment_id: 3,
                comment: "hi".into(),
                paste_id: 7,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["comments"][0]["comment_id"], 3);
        assert_eq!(json["comments"][0]["comment"], "hi");
        assert_eq!(json["comments"][0]["paste_id"], 7);
    }

    #[test]
    fn create_request_requires_comment_field() {
        let missing: Result<CreateCommentRequest, _> = serde_json::from_str("{}");
        assert!(missing.is_err());
    }
}
