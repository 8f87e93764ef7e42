use std::str::FromStr;
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    FileLoader, JobRegistry, LlmClient, RegistryError, StagingStore, StagingStoreError,
    WorkbookWriter,
};
use crate::domain::{ExtractionTemplate, Job, StoragePath, TaskId};

use super::extraction_pipeline::ExtractionPipeline;

/// Owns the job lifecycle: validates uploads, registers jobs, spawns one
/// background pipeline per accepted upload, and answers status queries.
pub struct ExtractionService<F, L, W> {
    registry: Arc<dyn JobRegistry>,
    staging_store: Arc<dyn StagingStore>,
    pipeline: Arc<ExtractionPipeline<F, L, W>>,
    max_upload_bytes: u64,
}

impl<F, L, W> ExtractionService<F, L, W>
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
        max_upload_bytes: u64,
    ) -> Self {
        let pipeline = Arc::new(ExtractionPipeline::new(
            file_loader,
            llm_client,
            workbook_writer,
            Arc::clone(&registry),
            Arc::clone(&staging_store),
            output_store,
        ));
        Self {
            registry,
            staging_store,
            pipeline,
            max_upload_bytes,
        }
    }

    /// Validates the upload, stages it, registers a processing job and
    /// schedules the background pipeline. Returns as soon as the job is
    /// registered; extraction continues independently of the caller.
    pub async fn create(
        &self,
        data: Bytes,
        filename: &str,
        template: &str,
    ) -> Result<TaskId, CreateJobError> {
        if filename.is_empty() {
            return Err(CreateJobError::EmptyFilename);
        }
        if !has_pdf_extension(filename) {
            return Err(CreateJobError::UnsupportedFileType(filename.to_string()));
        }
        if data.len() as u64 > self.max_upload_bytes {
            return Err(CreateJobError::FileTooLarge {
                limit_mb: self.max_upload_bytes / (1024 * 1024),
            });
        }
        let template = ExtractionTemplate::from_str(template)
            .map_err(|_| CreateJobError::UnknownTemplate(template.to_string()))?;

        let job = Job::new(filename.to_string(), template);
        let task_id = job.task_id;
        let upload_path = StoragePath::for_upload(&task_id, filename);

        self.staging_store.store(&upload_path, data).await?;
        self.registry.insert(job.clone()).await?;

        let pipeline = Arc::clone(&self.pipeline);
        tokio::spawn(async move {
            pipeline.run(job, upload_path).await;
        });

        tracing::info!(task_id = %task_id, filename, "Extraction job accepted");
        Ok(task_id)
    }

    pub async fn get_status(&self, task_id: TaskId) -> Result<Job, RegistryError> {
        self.registry.get(task_id).await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, RegistryError> {
        self.registry.list().await
    }

    /// Best-effort administrative removal. The pipeline is not signalled;
    /// if it is still running it finishes against a missing registry entry
    /// and its output stays on disk unreferenced.
    pub async fn cancel(&self, task_id: TaskId) -> Result<(), RegistryError> {
        self.registry.remove(task_id).await?;
        tracing::info!(task_id = %task_id, "Job removed from registry");
        Ok(())
    }
}

fn has_pdf_extension(filename: &str) -> bool {
    filename.len() > 4
        && filename
            .get(filename.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".pdf"))
}

#[derive(Debug, thiserror::Error)]
pub enum CreateJobError {
    #[error("no file selected")]
    EmptyFilename,
    #[error("only PDF files are supported, got '{0}'")]
    UnsupportedFileType(String),
    #[error("file size exceeds {limit_mb}MB limit")]
    FileTooLarge { limit_mb: u64 },
    #[error("invalid template selection: '{0}'")]
    UnknownTemplate(String),
    #[error("staging upload: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),
}
