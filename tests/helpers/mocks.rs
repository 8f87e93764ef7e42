use serde_json::json;

use fundex::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};

/// Treats the uploaded bytes as UTF-8 text, standing in for real PDF
/// parsing.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, data: &[u8], _filename: &str) -> Result<String, FileLoaderError> {
        String::from_utf8(data.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}

/// Returns a canned response for every prompt.
pub struct MockLlmClient {
    pub response: String,
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.response.clone())
    }
}

/// Fails every call, simulating a quota/network error.
pub struct FailingLlmClient;

#[async_trait::async_trait]
impl LlmClient for FailingLlmClient {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Err(LlmClientError::ApiRequestFailed(
            "quota exceeded for model".to_string(),
        ))
    }
}

/// Blocks until released through the notify handle, then answers.
pub struct GatedLlmClient {
    pub gate: std::sync::Arc<tokio::sync::Notify>,
    pub response: String,
}

#[async_trait::async_trait]
impl LlmClient for GatedLlmClient {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmClientError> {
        self.gate.notified().await;
        Ok(self.response.clone())
    }
}

/// Never resolves, pinning jobs in the processing state.
pub struct PendingLlmClient;

#[async_trait::async_trait]
impl LlmClient for PendingLlmClient {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmClientError> {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

/// Minimal but schema-complete response for "Extraction Template 1".
pub fn fund_report_response() -> String {
    json!({
        "Fund Data": [
            {"Data Point": "Fund Name", "Value - Current Period": "Northwind Capital III"},
            {"Data Point": "Fund Size", "Value - Current Period": 250_000_000},
        ],
        "Fund Manager": [
            {"Data Point": "General Partner", "Value - Current Period": "Northwind GP LLC"},
        ],
        "Company Investment Positions": [
            {
                "Company": "Acme Robotics",
                "Industry": "Industrial Automation",
                "Invested Capital [B]": 12_500_000,
                "IRR": 0.18,
                "Status": "Active"
            },
        ],
        "Financial Summary": [
            {"Data Point": "Net Asset Value", "Value - Current Period": 180_000_000},
        ],
    })
    .to_string()
}

/// Minimal but schema-complete response for "Extraction Template 2".
pub fn portfolio_summary_response() -> String {
    json!({
        "Portfolio Summary": [
            {"Data Points": "Fund Name", "Value - Current Period": "Northwind Capital III"},
        ],
        "Schedule of Investments": [
            {
                "Company": "Acme Robotics",
                "Total Invested (A)": 12_500_000,
                "Status": "Active"
            },
        ],
        "Performance Metrics": [
            {"Data Points": "Net IRR", "Value - Current Period": 0.14},
        ],
    })
    .to_string()
}
