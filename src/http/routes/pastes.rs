//! Paste endpoints

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Paste, PasteRepo};
use crate::http::error::ApiError;
use crate::http::extractors::PastePath;
use crate::http::server::AppState;
use crate::models::{CodeBody, Description, NewPaste, UserName};

/// Create paste request
#[derive(Deserialize)]
pub struct CreatePasteRequest {
    pub user_name: String,
    pub description: String,
    pub code: String,
}

/// Update paste request
#[derive(Deserialize)]
pub struct UpdatePasteRequest {
    pub code: String,
}

/// Paste response
#[derive(Serialize)]
pub struct PasteResponse {
    pub paste_id: i32,
    pub user_name: String,
    pub description: String,
    pub code: String,
}

impl From<Paste> for PasteResponse {
    fn from(p: Paste) -> Self {
        Self {
            paste_id: p.paste_id,
            user_name: p.user_name,
            description: p.description,
            code: p.code,
        }
    }
}

/// List pastes response envelope
#[derive(Serialize)]
pub struct PasteListResponse {
    pub pastes: Vec<PasteResponse>,
}

/// GET /pastes - list all pastes, newest first
async fn list_pastes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PasteListResponse>, ApiError> {
    let pastes = PasteRepo::new(&state.pool).list().await?;

    Ok(Json(PasteListResponse {
        pastes: pastes.into_iter().map(PasteResponse::from).collect(),
    }))
}

/// POST /pastes - create a new paste
async fn create_paste(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePasteRequest>,
) -> Result<StatusCode, ApiError> {
    let paste = NewPaste {
        user_name: UserName::new(&req.user_name)?,
        description: Description::new(&req.description)?,
        code: CodeBody::new(&req.code)?,
    };

    PasteRepo::new(&state.pool).create(paste).await?;

    Ok(StatusCode::OK)
}

/// PUT /pastes/{paste_id} - update a paste's code body
///
/// Succeeds even when no paste matches; a missing row is a silent no-op.
async fn update_paste(
    State(state): State<Arc<AppState>>,
    PastePath(paste_id): PastePath,
    Json(req): Json<UpdatePasteRequest>,
) -> Result<Json<&'static str>, ApiError> {
    let code = CodeBody::new(&req.code)?;

    PasteRepo::new(&state.pool)
        .update_code(paste_id, code)
        .await?;

    Ok(Json("Code was updated"))
}

/// DELETE /pastes/{paste_id} - delete a paste and its comments
async fn delete_paste(
    State(state): State<Arc<AppState>>,
    PastePath(paste_id): PastePath,
) -> Result<Json<&'static str>, ApiError> {
    PasteRepo::new(&state.pool).delete(paste_id).await?;

    Ok(Json("Paste was deleted!"))
}

/// Paste routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pastes", get(list_pastes).post(create_paste))
        .route(
            "/pastes/{paste_id}",
            put(update_paste).delete(delete_paste),
        )
}
