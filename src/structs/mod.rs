pub mod ai;
pub mod analysis_result;
pub mod api;
pub mod cli;
pub mod config;
pub mod job;
pub mod job_event;
pub mod job_id;
pub mod repo_digest;
