use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{JobRegistry, RegistryError};
use crate::domain::{Job, TaskId};

/// Single-process job registry. One lock serializes the per-job writer
/// (the pipeline) against concurrent status polls; nothing is persisted,
/// so a restart empties the registry.
pub struct InMemoryJobRegistry {
    jobs: RwLock<HashMap<Uuid, Job>>,
}

impl InMemoryJobRegistry {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryJobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRegistry for InMemoryJobRegistry {
    async fn insert(&self, job: Job) -> Result<(), RegistryError> {
        let mut jobs = self.jobs.write().await;
        let key = job.task_id.as_uuid();
        if jobs.contains_key(&key) {
            return Err(RegistryError::AlreadyExists(job.task_id));
        }
        jobs.insert(key, job);
        Ok(())
    }

    async fn get(&self, task_id: TaskId) -> Result<Job, RegistryError> {
        self.jobs
            .read()
            .await
            .get(&task_id.as_uuid())
            .cloned()
            .ok_or(RegistryError::NotFound(task_id))
    }

    async fn list(&self) -> Result<Vec<Job>, RegistryError> {
        Ok(self.jobs.read().await.values().cloned().collect())
    }

    async fn remove(&self, task_id: TaskId) -> Result<(), RegistryError> {
        self.jobs
            .write()
            .await
            .remove(&task_id.as_uuid())
            .map(|_| ())
            .ok_or(RegistryError::NotFound(task_id))
    }

    async fn set_progress(&self, task_id: TaskId, progress: u8) -> Result<(), RegistryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&task_id.as_uuid())
            .ok_or(RegistryError::NotFound(task_id))?;
        if !job.is_terminal() {
            job.progress = Some(progress.min(100));
        }
        Ok(())
    }

    async fn mark_completed(
        &self,
        task_id: TaskId,
        download_url: String,
    ) -> Result<(), RegistryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&task_id.as_uuid())
            .ok_or(RegistryError::NotFound(task_id))?;
        if job.is_terminal() {
            return Err(RegistryError::TerminalState(task_id));
        }
        job.complete(download_url);
        Ok(())
    }

    async fn mark_failed(&self, task_id: TaskId, error: &str) -> Result<(), RegistryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&task_id.as_uuid())
            .ok_or(RegistryError::NotFound(task_id))?;
        if job.is_terminal() {
            return Err(RegistryError::TerminalState(task_id));
        }
        job.fail(error.to_string());
        Ok(())
    }
}
