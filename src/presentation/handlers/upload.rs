use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, WorkbookWriter};
use crate::application::services::CreateJobError;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct UploadResponse {
    pub task_id: String,
    pub message: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L, W>(
    State(state): State<AppState<F, L, W>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    W: WorkbookWriter + 'static,
{
    let mut upload: Option<(String, Bytes)> = None;
    let mut template: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return (
                    e.status(),
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read uploaded file");
                        return (
                            e.status(),
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };
                upload = Some((filename, data));
            }
            "template" => {
                template = match field.text().await {
                    Ok(t) => Some(t),
                    Err(e) => {
                        return (
                            e.status(),
                            Json(ErrorResponse {
                                error: format!("Failed to read template field: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };
            }
            _ => {}
        }
    }

    let Some((filename, data)) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    };
    let Some(template) = template else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing template selection".to_string(),
            }),
        )
            .into_response();
    };

    tracing::debug!(filename = %filename, bytes = data.len(), template = %template, "Upload received");

    match state
        .extraction_service
        .create(data, &filename, &template)
        .await
    {
        Ok(task_id) => (
            StatusCode::OK,
            Json(UploadResponse {
                task_id: task_id.to_string(),
                message: "File uploaded successfully. Processing started.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            let status = match &e {
                CreateJobError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                CreateJobError::EmptyFilename
                | CreateJobError::UnsupportedFileType(_)
                | CreateJobError::UnknownTemplate(_) => StatusCode::BAD_REQUEST,
                CreateJobError::Staging(_) | CreateJobError::Registry(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!(error = %e, "Upload failed");
            } else {
                tracing::warn!(error = %e, "Upload rejected");
            }
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}
