use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, WorkbookWriter};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub llm: String,
}

pub async fn health_handler<F, L, W>(State(state): State<AppState<F, L, W>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    W: WorkbookWriter + 'static,
{
    let llm = if state.settings.llm.api_key.is_empty() {
        "not_configured"
    } else {
        "configured"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            llm: llm.to_string(),
        }),
    )
}
