mod extraction_pipeline;
mod extraction_service;
mod prompt;
mod response_schema;

pub use extraction_pipeline::{ExtractionPipeline, PipelineError};
pub use extraction_service::{CreateJobError, ExtractionService};
pub use prompt::build_extraction_prompt;
pub use response_schema::{parse_extraction_response, ResponseSchemaError};
