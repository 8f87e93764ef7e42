use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, StagingStore, WorkbookWriter};
use crate::application::services::ExtractionService;
use crate::presentation::config::Settings;

pub struct AppState<F, L, W>
where
    F: FileLoader,
    L: LlmClient,
    W: WorkbookWriter,
{
    pub extraction_service: Arc<ExtractionService<F, L, W>>,
    pub output_store: Arc<dyn StagingStore>,
    pub settings: Settings,
}

impl<F, L, W> Clone for AppState<F, L, W>
where
    F: FileLoader,
    L: LlmClient,
    W: WorkbookWriter,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            output_store: Arc::clone(&self.output_store),
            settings: self.settings.clone(),
        }
    }
}
