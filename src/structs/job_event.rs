use serde::Serialize;
use crate::enums::job_status::JobStatus;
use crate::structs::job_id::JobId;

/// Snapshot published after every accepted registry write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobEvent {
    pub job_id: JobId,
    pub status: JobStatus,
    pub progress: u8,
}
