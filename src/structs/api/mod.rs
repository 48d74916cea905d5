pub mod create_job_request;
pub mod create_job_response;
pub mod job_status_response;
pub mod summary_response;
pub mod api_status_response;
pub mod key_status;
pub mod health_response;
pub mod error_response;
