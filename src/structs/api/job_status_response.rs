use serde::Serialize;
use crate::enums::job_status::JobStatus;
use crate::structs::job::Job;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JobStatusResponse {
    pub status: JobStatus,
    pub progress: u8,
    pub error: Option<String>,
}

impl From<&Job> for JobStatusResponse {
    fn from(job: &Job) -> Self {
        Self {
            status: job.status,
            progress: job.progress,
            error: job.error.clone(),
        }
    }
}
