use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single-shot generation. The prompt already embeds all context;
    /// the implementation performs exactly one API round-trip.
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("api key not configured")]
    MissingApiKey,
}
