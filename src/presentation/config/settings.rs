use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub storage: StorageSettings,
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: u64,
}

impl UploadSettings {
    pub fn max_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Settings {
    /// Builds the runtime configuration from environment variables,
    /// falling back to development defaults.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 8000),
            },
            llm: LlmSettings {
                api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: env_or("GEMINI_MODEL", "gemini-2.0-flash-exp"),
            },
            storage: StorageSettings {
                upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
                output_dir: PathBuf::from(env_or("OUTPUT_DIR", "outputs")),
            },
            upload: UploadSettings {
                max_file_size_mb: env_parsed("MAX_UPLOAD_MB", 50),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
