pub mod config;
pub mod server_config;
pub mod analysis_config;
pub mod digest_config;
pub mod jobs_config;
