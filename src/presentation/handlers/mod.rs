mod download;
mod health;
mod jobs;
mod status;
mod upload;

use serde::Serialize;

pub use download::download_handler;
pub use health::health_handler;
pub use jobs::{cancel_job_handler, list_jobs_handler};
pub use status::status_handler;
pub use upload::upload_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
