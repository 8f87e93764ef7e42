use chrono::{DateTime, Utc};

use super::{ExtractionTemplate, JobStatus, TaskId};

/// One upload-to-download unit of work. A job is created in `Processing`
/// and transitions exactly once, to either `Completed` or `Failed`.
#[derive(Debug, Clone)]
pub struct Job {
    pub task_id: TaskId,
    pub filename: String,
    pub template: ExtractionTemplate,
    pub status: JobStatus,
    pub progress: Option<u8>,
    pub download_url: Option<String>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(filename: String, template: ExtractionTemplate) -> Self {
        Self {
            task_id: TaskId::new(),
            filename,
            template,
            status: JobStatus::Processing,
            progress: Some(0),
            download_url: None,
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn complete(&mut self, download_url: String) {
        self.status = JobStatus::Completed;
        self.download_url = Some(download_url);
        self.progress = Some(100);
        self.completed_at = Some(Utc::now());
    }

    pub fn fail(&mut self, error: String) {
        self.status = JobStatus::Failed;
        self.error = Some(error);
        self.completed_at = Some(Utc::now());
    }

    /// Name of the workbook this job produces, derived from the task id
    /// and the upload filename with its `.pdf` suffix removed.
    pub fn workbook_filename(&self) -> String {
        let stem = match self.filename.char_indices().rev().nth(3) {
            Some((idx, _)) if self.filename[idx..].eq_ignore_ascii_case(".pdf") => {
                &self.filename[..idx]
            }
            _ => self.filename.as_str(),
        };
        format!("{}_{}_extracted.xlsx", self.task_id, stem)
    }
}
