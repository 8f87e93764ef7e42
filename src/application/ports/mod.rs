mod file_loader;
mod job_registry;
mod llm_client;
mod staging_store;
mod workbook_writer;

pub use file_loader::{FileLoader, FileLoaderError};
pub use job_registry::{JobRegistry, RegistryError};
pub use llm_client::{LlmClient, LlmClientError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use workbook_writer::{WorkbookError, WorkbookWriter};
