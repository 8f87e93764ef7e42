use std::fmt;

use super::TaskId;

/// Location of a staged or generated file, relative to its store root.
/// Paths are keyed by task id so concurrent jobs never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_upload(task_id: &TaskId, filename: &str) -> Self {
        Self(format!("{}_{}", task_id, filename))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
