use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient, WorkbookWriter};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    cancel_job_handler, download_handler, health_handler, list_jobs_handler, status_handler,
    upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, L, W>(state: AppState<F, L, W>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    W: WorkbookWriter + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Body cap sits above the upload limit so the handler can answer
    // oversized files with its own 413 instead of a framework reject.
    let body_limit =
        DefaultBodyLimit::max((state.settings.upload.max_bytes() + 1024 * 1024) as usize);

    Router::new()
        .route("/health", get(health_handler::<F, L, W>))
        .route("/api/upload", post(upload_handler::<F, L, W>))
        .route("/api/status/{task_id}", get(status_handler::<F, L, W>))
        .route("/api/jobs", get(list_jobs_handler::<F, L, W>))
        .route("/api/jobs/{task_id}", delete(cancel_job_handler::<F, L, W>))
        .route("/downloads/{filename}", get(download_handler::<F, L, W>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
