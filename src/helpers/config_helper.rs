use crate::config::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_allowed_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }

    pub fn default_api_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    pub fn default_max_attempts() -> u32 {
        2
    }

    pub fn default_retry_base_delay_ms() -> u64 {
        1000
    }

    pub fn default_worker_pool_size() -> usize {
        5
    }

    pub fn default_request_timeout_secs() -> u64 {
        120
    }

    pub fn default_temperature() -> f64 {
        0.4
    }

    pub fn default_max_output_tokens() -> u32 {
        8192
    }

    pub fn default_cache_dir() -> String {
        "cache".to_string()
    }

    pub fn default_relevant_extensions() -> Vec<String> {
        vec!["py".to_string(), "js".to_string(), "md".to_string()]
    }

    pub fn default_max_file_chars() -> usize {
        2000
    }

    pub fn default_max_readme_chars() -> usize {
        4000
    }

    pub fn default_prompt_contents_chars() -> usize {
        3000
    }

    pub fn default_poll_interval_ms() -> u64 {
        500
    }
}
