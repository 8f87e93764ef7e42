mod settings;

pub use settings::{LlmSettings, ServerSettings, Settings, StorageSettings, UploadSettings};
