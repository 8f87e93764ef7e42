use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF text extraction over `pdf-extract`. Parsing is CPU-bound, so it
/// runs on the blocking pool under a hard timeout.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    async fn extract_text(&self, data: &[u8], filename: &str) -> Result<String, FileLoaderError> {
        let owned = data.to_vec();

        let raw = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&owned)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let text = sanitize_extracted_text(&raw);
        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(filename.to_string()));
        }

        tracing::info!(chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}
