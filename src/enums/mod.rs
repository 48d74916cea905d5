pub mod analysis_kind;
pub mod job_status;
pub mod failure_tag;
pub mod ai_provider_error;
pub mod backoff_strategy;
pub mod job_mutation;
pub mod commands;
