use async_trait::async_trait;

use crate::domain::{Job, TaskId};

/// Process-wide job store. Implementations serialize concurrent access;
/// the terminal transitions (`mark_completed`, `mark_failed`) must be
/// accepted at most once per job.
#[async_trait]
pub trait JobRegistry: Send + Sync {
    async fn insert(&self, job: Job) -> Result<(), RegistryError>;

    async fn get(&self, task_id: TaskId) -> Result<Job, RegistryError>;

    async fn list(&self) -> Result<Vec<Job>, RegistryError>;

    /// Removes the job without transitioning it. Work still in flight
    /// for the removed id keeps running and orphans its output.
    async fn remove(&self, task_id: TaskId) -> Result<(), RegistryError>;

    /// Advisory progress update. Ignored once the job is terminal.
    async fn set_progress(&self, task_id: TaskId, progress: u8) -> Result<(), RegistryError>;

    async fn mark_completed(&self, task_id: TaskId, download_url: String)
        -> Result<(), RegistryError>;

    async fn mark_failed(&self, task_id: TaskId, error: &str) -> Result<(), RegistryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("job not found: {0}")]
    NotFound(TaskId),
    #[error("job already registered: {0}")]
    AlreadyExists(TaskId),
    #[error("job {0} is already in a terminal state")]
    TerminalState(TaskId),
}
