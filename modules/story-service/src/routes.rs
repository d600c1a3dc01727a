//! Axum route handlers for the stories API.

use crate::store::StoryStore;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use parking_lot::Mutex;
use record_store::StoreError;
use std::sync::Arc;
use story_types::*;

pub struct AppState {
    pub store: Mutex<StoryStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(StoryStore::new()),
        }
    }
}

/// Store failure rendered as `{"detail": ...}`.
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        log::warn!("[STORIES] {}: {:?}", status, self.0);
        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/stories", get(list_stories).post(create_story))
        .route(
            "/stories/:story_id",
            get(get_story)
                .put(replace_story)
                .patch(patch_story)
                .delete(delete_story),
        )
        .with_state(state)
}

// POST /stories
pub async fn create_story(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<StoryDraft>,
) -> Json<Story> {
    Json(state.store.lock().add(draft))
}

// GET /stories
pub async fn list_stories(State(state): State<Arc<AppState>>) -> Json<Vec<Story>> {
    Json(state.store.lock().list())
}

// GET /stories/:story_id
pub async fn get_story(
    State(state): State<Arc<AppState>>,
    Path(story_id): Path<String>,
) -> Result<Json<Story>, ApiError> {
    Ok(Json(state.store.lock().get(&story_id)?))
}

// PUT /stories/:story_id
pub async fn replace_story(
    State(state): State<Arc<AppState>>,
    Path(story_id): Path<String>,
    Json(draft): Json<StoryDraft>,
) -> Result<Json<Story>, ApiError> {
    Ok(Json(state.store.lock().replace(&story_id, draft)?))
}

// PATCH /stories/:story_id
pub async fn patch_story(
    State(state): State<Arc<AppState>>,
    Path(story_id): Path<String>,
    Json(patch): Json<StoryPatch>,
) -> Result<Json<Story>, ApiError> {
    Ok(Json(state.store.lock().patch(&story_id, patch)?))
}

// DELETE /stories/:story_id
pub async fn delete_story(
    State(state): State<Arc<AppState>>,
    Path(story_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.lock().delete(&story_id)?;
    Ok(Json(MessageResponse::new("Story deleted")))
}
