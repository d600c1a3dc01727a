//! Axum route handlers for the todo API.

use crate::store::TaskStore;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, patch};
use parking_lot::Mutex;
use record_store::StoreError;
use std::sync::Arc;
use task_types::*;

pub struct AppState {
    pub store: Mutex<TaskStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(TaskStore::new()),
        }
    }
}

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
        log::warn!("[TASKS] {}: {:?}", status, self.0);
        (
            status,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tasks", get(list_tasks).post(create_task).patch(update_task))
        .route("/tasks/search", get(search_tasks))
        .route(
            "/tasks/:task_id",
            get(get_task).put(replace_task).delete(delete_task),
        )
        .route("/tasks/:task_id/complete", patch(complete_task))
        .with_state(state)
}

// GET /
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Todo App".to_string(),
    })
}

// POST /tasks
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<TaskDraft>,
) -> (StatusCode, Json<ApiResponse<Task>>) {
    let task = state.store.lock().add(draft);
    (
        StatusCode::CREATED,
        Json(ApiResponse::ok(task, "Task created successfully")),
    )
}

// GET /tasks
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<DataResponse<Vec<Task>>> {
    Json(DataResponse {
        data: state.store.lock().list(),
    })
}

// GET /tasks/search?query=
pub async fn search_tasks(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SearchQuery>,
) -> Json<DataResponse<Vec<Task>>> {
    Json(DataResponse {
        data: state.store.lock().search(&q.query),
    })
}

// GET /tasks/:task_id
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i64>,
) -> Result<Json<DataResponse<Task>>, ApiError> {
    let task = state.store.lock().get(task_id)?;
    Ok(Json(DataResponse { data: task }))
}

// PUT /tasks/:task_id
pub async fn replace_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i64>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state.store.lock().replace(task_id, draft)?;
    Ok(Json(ApiResponse::ok(task, "Task updated successfully")))
}

// PATCH /tasks
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Json(update): Json<TaskUpdate>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state.store.lock().update(update)?;
    Ok(Json(ApiResponse::ok(task, "Task updated successfully")))
}

// DELETE /tasks/:task_id
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i64>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    state.store.lock().delete(task_id)?;
    Ok(Json(ApiResponse::done(format!(
        "Task {} deleted successfully",
        task_id
    ))))
}

// PATCH /tasks/:task_id/complete
pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i64>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state.store.lock().mark_complete(task_id)?;
    Ok(Json(ApiResponse::ok(
        task,
        format!("Task {} marked as complete", task_id),
    )))
}
