use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{FileLoader, LlmClient, RegistryError, WorkbookWriter};
use crate::domain::{Job, TaskId};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct StatusResponse {
    pub task_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl From<Job> for StatusResponse {
    fn from(job: Job) -> Self {
        Self {
            task_id: job.task_id.to_string(),
            status: job.status.as_str().to_string(),
            download_url: job.download_url,
            error: job.error,
            progress: job.progress,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn status_handler<F, L, W>(
    State(state): State<AppState<F, L, W>>,
    Path(task_id): Path<String>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    W: WorkbookWriter + 'static,
{
    let uuid = match Uuid::parse_str(&task_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid task ID: {}", task_id),
                }),
            )
                .into_response();
        }
    };

    match state
        .extraction_service
        .get_status(TaskId::from_uuid(uuid))
        .await
    {
        Ok(job) => (StatusCode::OK, Json(StatusResponse::from(job))).into_response(),
        Err(RegistryError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Task not found: {}", task_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch job: {}", e),
                }),
            )
                .into_response()
        }
    }
}
