use std::sync::Arc;

use bytes::Bytes;
use tracing::Instrument;

use crate::application::ports::{
    FileLoader, FileLoaderError, JobRegistry, LlmClient, LlmClientError, StagingStore,
    StagingStoreError, WorkbookError, WorkbookWriter,
};
use crate::domain::{Job, StoragePath};

use super::prompt::build_extraction_prompt;
use super::response_schema::{parse_extraction_response, ResponseSchemaError};

/// The background unit of work behind one job: fetch the staged PDF,
/// extract its text, run the LLM extraction, render the workbook, and
/// record exactly one terminal transition in the registry. Every step is
/// fail-fast; nothing is retried.
pub struct ExtractionPipeline<F, L, W> {
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    workbook_writer: Arc<W>,
    registry: Arc<dyn JobRegistry>,
    staging_store: Arc<dyn StagingStore>,
    output_store: Arc<dyn StagingStore>,
}

impl<F, L, W> ExtractionPipeline<F, L, W>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    W: WorkbookWriter + 'static,
{
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        workbook_writer: Arc<W>,
        registry: Arc<dyn JobRegistry>,
        staging_store: Arc<dyn StagingStore>,
        output_store: Arc<dyn StagingStore>,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            workbook_writer,
            registry,
            staging_store,
            output_store,
        }
    }

    pub async fn run(&self, job: Job, upload_path: StoragePath) {
        let span = tracing::info_span!(
            "extraction_job",
            task_id = %job.task_id,
            filename = %job.filename,
            template = %job.template,
        );
        self.execute(job, upload_path).instrument(span).await;
    }

    async fn execute(&self, job: Job, upload_path: StoragePath) {
        let task_id = job.task_id;
        let result = self.process(&job, &upload_path).await;

        // The staged upload is no longer needed whichever way the job ended.
        if let Err(e) = self.staging_store.delete(&upload_path).await {
            tracing::warn!(error = %e, path = %upload_path, "Failed to delete staged upload");
        }

        match result {
            Ok(download_url) => {
                match self.registry.mark_completed(task_id, download_url).await {
                    Ok(()) => tracing::info!("Extraction job completed"),
                    Err(e) => tracing::warn!(
                        error = %e,
                        "Job was removed before completion; workbook output is orphaned"
                    ),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Extraction job failed");
                if let Err(re) = self.registry.mark_failed(task_id, &e.to_string()).await {
                    tracing::warn!(error = %re, "Could not record job failure");
                }
            }
        }
    }

    async fn process(&self, job: &Job, upload_path: &StoragePath) -> Result<String, PipelineError> {
        self.advance(job, 10).await;

        let data = self
            .staging_store
            .fetch(upload_path)
            .await
            .map_err(PipelineError::Staging)?;

        let text = self
            .file_loader
            .extract_text(&data, &job.filename)
            .await
            .map_err(PipelineError::Extraction)?;
        self.advance(job, 40).await;

        let prompt = build_extraction_prompt(job.template, &text);
        tracing::debug!(prompt_chars = prompt.len(), "Sending extraction prompt to LLM");
        let raw = self
            .llm_client
            .generate(&prompt)
            .await
            .map_err(PipelineError::Llm)?;
        self.advance(job, 70).await;

        let extraction =
            parse_extraction_response(&raw, job.template).map_err(PipelineError::Schema)?;

        let buffer = self
            .workbook_writer
            .render(&extraction, job.template)
            .await
            .map_err(PipelineError::Workbook)?;

        let workbook_name = job.workbook_filename();
        let output_path = StoragePath::from_raw(workbook_name.as_str());
        self.output_store
            .store(&output_path, Bytes::from(buffer))
            .await
            .map_err(PipelineError::Staging)?;

        Ok(format!("/downloads/{}", workbook_name))
    }

    async fn advance(&self, job: &Job, progress: u8) {
        if let Err(e) = self.registry.set_progress(job.task_id, progress).await {
            tracing::debug!(error = %e, progress, "Progress update dropped");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("staging: {0}")]
    Staging(StagingStoreError),
    #[error("text extraction: {0}")]
    Extraction(FileLoaderError),
    #[error("llm extraction: {0}")]
    Llm(LlmClientError),
    #[error("response validation: {0}")]
    Schema(ResponseSchemaError),
    #[error("workbook: {0}")]
    Workbook(WorkbookError),
}
