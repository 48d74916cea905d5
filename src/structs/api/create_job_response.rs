use serde::Serialize;
use crate::enums::job_status::JobStatus;
use crate::structs::job_id::JobId;

#[derive(Serialize, Debug, Clone)]
pub struct CreateJobResponse {
    pub job_id: JobId,
    pub status: JobStatus,
}
