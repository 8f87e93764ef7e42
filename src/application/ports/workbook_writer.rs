use async_trait::async_trait;

use crate::domain::{ExtractionResult, ExtractionTemplate};

#[async_trait]
pub trait WorkbookWriter: Send + Sync {
    /// Renders the extraction into a complete workbook file, returned as
    /// an in-memory buffer.
    async fn render(
        &self,
        extraction: &ExtractionResult,
        template: ExtractionTemplate,
    ) -> Result<Vec<u8>, WorkbookError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("workbook rendering failed: {0}")]
    RenderFailed(String),
}
