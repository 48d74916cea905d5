pub mod ai_providers;
pub mod retry_policy;
pub mod fallback_table;
pub mod analysis_client;
pub mod named_task_set;
pub mod task_dispatcher;
pub mod job_registry;
pub mod job_lifecycle;
pub mod job_facade;
pub mod repo_cloner;
pub mod tree_parser;
pub mod git_digest_producer;
